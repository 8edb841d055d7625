use super::date_utils::parse_document_date;
use super::itinerary::{DayActivity, Itinerary};
use crate::error::ParseError;
use serde::Deserialize;

/// Document shape as written on disk. Dates are kept as text until the
/// configured formats are applied.
#[derive(Debug, Deserialize)]
struct RawItinerary {
    title: String,
    departure_date: String,
    return_date: String,
    days: Vec<Vec<DayActivity>>,
}

pub(crate) fn parse_document(json: &str, formats: &[&str]) -> Result<Itinerary, ParseError> {
    let raw: RawItinerary = serde_json::from_str(json)?;
    let departure_date = parse_date_field("departure_date", &raw.departure_date, formats)?;
    let return_date = parse_date_field("return_date", &raw.return_date, formats)?;

    tracing::debug!(
        title = %raw.title,
        %departure_date,
        %return_date,
        days = raw.days.len(),
        "parsed itinerary document"
    );

    Ok(Itinerary {
        title: raw.title,
        departure_date,
        return_date,
        days: raw.days,
    })
}

fn parse_date_field(
    field: &'static str,
    input: &str,
    formats: &[&str],
) -> Result<chrono::NaiveDate, ParseError> {
    parse_document_date(input, formats).ok_or_else(|| ParseError::InvalidDate {
        field,
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::DEFAULT_FORMATS;

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = parse_document("{ not json", DEFAULT_FORMATS).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn missing_required_field_is_a_json_error() {
        let doc = r#"{ "title": "t", "departure_date": "2024-03-10", "days": [] }"#;
        let err = parse_document(doc, DEFAULT_FORMATS).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
        assert!(err.to_string().contains("return_date"));
    }

    #[test]
    fn activity_without_start_time_is_rejected() {
        let doc = r#"{
            "title": "t",
            "departure_date": "2024-03-10",
            "return_date": "2024-03-10",
            "days": [[ { "content": "walk" } ]]
        }"#;
        let err = parse_document(doc, DEFAULT_FORMATS).unwrap_err();
        assert!(err.to_string().contains("startTime"));
    }

    #[test]
    fn unparsable_date_names_the_field() {
        let doc = r#"{
            "title": "t",
            "departure_date": "2024-03-10",
            "return_date": "next tuesday",
            "days": []
        }"#;
        let err = parse_document(doc, DEFAULT_FORMATS).unwrap_err();
        match err {
            ParseError::InvalidDate { field, input } => {
                assert_eq!(field, "return_date");
                assert_eq!(input, "next tuesday");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn null_optional_fields_are_absent() {
        let doc = r#"{
            "title": "t",
            "departure_date": "2024-03-10",
            "return_date": "2024-03-10",
            "days": [[ { "content": "walk", "startTime": "9:00", "budget": null, "note": "" } ]]
        }"#;
        let it = parse_document(doc, DEFAULT_FORMATS).unwrap();
        assert_eq!(it.days[0][0].budget, None);
        assert_eq!(it.days[0][0].note.as_deref(), Some(""));
    }

    #[test]
    fn empty_days_list_is_accepted() {
        let doc = r#"{
            "title": "t",
            "departure_date": "2024/03/10",
            "return_date": "2024/03/14",
            "days": []
        }"#;
        let it = parse_document(doc, DEFAULT_FORMATS).unwrap();
        assert!(it.days.is_empty());
        assert!(it.activities_for_day(1).is_empty());
    }
}

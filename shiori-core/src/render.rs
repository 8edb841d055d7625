//! Pure Markdown rendering helpers.
//!
//! Header:    `# 京都旅行` followed by `2024/03/10 ~ 2024/03/12`
//! Selector:  `**[1日目]** · 2日目 · 3日目`
//! Day table: 開始 | 終了 | 内容 | 金額 | 備考

use crate::itinerary::{DayActivity, Itinerary};
use crate::view::{ItineraryView, day_label};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

pub const LOADING_MESSAGE: &str = "スケジュールをロード中．．．";
pub const TABLE_COLUMNS: [&str; 5] = ["開始", "終了", "内容", "金額", "備考"];
pub const CURRENCY_SUFFIX: &str = "円";

static LINE_BREAKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[\r\n]+\s*").expect("valid line break regex"));
static INLINE_MARKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([*_`])").expect("valid inline mark regex"));

/// `# 京都旅行\n2024/03/10 ~ 2024/03/12\n`
pub fn format_header(itinerary: &Itinerary, date_format: &str) -> String {
    format!(
        "# {}\n{} ~ {}\n",
        cell_text(&itinerary.title),
        format_date(itinerary.departure_date, date_format),
        format_date(itinerary.return_date, date_format)
    )
}

/// One label per trip day, the selected one in bold brackets.
pub fn format_day_selector(view: &ItineraryView) -> String {
    let selected = view.selected_day();
    let labels: Vec<String> = view
        .day_labels()
        .into_iter()
        .zip(1..)
        .map(|(label, day)| {
            if day == selected {
                format!("**[{label}]**")
            } else {
                label
            }
        })
        .collect();
    labels.join(" · ")
}

/// `## 2日目 (2024/03/11)`, without the date when the day is before departure.
pub fn format_day_heading(day: i64, date: Option<NaiveDate>, date_format: &str) -> String {
    match date {
        Some(d) => format!("## {} ({})", day_label(day), format_date(d, date_format)),
        None => format!("## {}", day_label(day)),
    }
}

/// Table of the given activities in stored order. The header is always
/// present, an empty day has no body rows.
pub fn format_activity_table(activities: &[DayActivity]) -> String {
    let header: Vec<String> = TABLE_COLUMNS.iter().map(|c| format!("**{c}**")).collect();
    let mut md = String::from("|:-:|:-:|:-:|:-:|:-:|\n");
    md.push_str(&format!("|{}|\n", header.join("|")));
    md.push_str("|:-:|:-:|:-|-:|:-|\n");
    for activity in activities {
        md.push_str(&format_activity_row(activity));
        md.push('\n');
    }
    md.push_str("|-\n");
    md
}

/// `|08:00|10:15|新幹線で京都へ|14170円||`
pub fn format_activity_row(activity: &DayActivity) -> String {
    let cells = [
        cell_text(&activity.start_time),
        optional_cell(activity.finish_time.as_deref()),
        cell_text(&activity.content),
        format_budget(activity.budget.as_deref()),
        optional_cell(activity.note.as_deref()),
    ];
    format!("|{}|", cells.join("|"))
}

/// `Some("1200")` is `1200円`; a missing or empty budget is an empty cell.
pub fn format_budget(budget: Option<&str>) -> String {
    match budget {
        Some(b) if !b.is_empty() => format!("{}{CURRENCY_SUFFIX}", cell_text(b)),
        _ => String::new(),
    }
}

/// Formats a date according to the user's configuration.
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    date.format(date_format).to_string()
}

fn optional_cell(value: Option<&str>) -> String {
    value.map(cell_text).unwrap_or_default()
}

/// Keeps a value on one table row as literal text: line breaks collapse to a
/// space, pipes become box-drawing bars and emphasis/code marks are escaped.
fn cell_text(value: &str) -> String {
    let one_line = LINE_BREAKS.replace_all(value.trim(), " ").replace('|', "│");
    INLINE_MARKS
        .replace_all(&one_line, r"\${1}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::DayCountMode;
    use crate::tests::common::sample_itinerary;

    fn activity(budget: Option<&str>) -> DayActivity {
        DayActivity {
            content: "昼食".to_string(),
            start_time: "12:00".to_string(),
            finish_time: None,
            budget: budget.map(str::to_string),
            note: None,
        }
    }

    #[test]
    fn header_shows_title_and_range() {
        let s = format_header(&sample_itinerary(), "%Y/%m/%d");
        assert_eq!(s, "# 京都旅行\n2024/03/10 ~ 2024/03/12\n");
    }

    #[test]
    fn selector_marks_selected_day() {
        let mut view = ItineraryView::new(sample_itinerary(), DayCountMode::Calendar);
        view.select_day(2);
        assert_eq!(format_day_selector(&view), "1日目 · **[2日目]** · 3日目");
    }

    #[test]
    fn budget_gets_yen_suffix_only_when_present() {
        assert_eq!(format_budget(Some("1200")), "1200円");
        assert_eq!(format_budget(None), "");
        assert_eq!(format_budget(Some("")), "");
    }

    #[test]
    fn row_without_optional_fields_has_empty_cells() {
        let row = format_activity_row(&activity(None));
        assert_eq!(row, "|12:00||昼食|||");
        assert!(!row.contains("0円"));
        assert!(!row.contains("undefined"));
    }

    #[test]
    fn row_with_all_fields() {
        let a = DayActivity {
            content: "清水寺".to_string(),
            start_time: "09:00".to_string(),
            finish_time: Some("11:30".to_string()),
            budget: Some("500".to_string()),
            note: Some("拝観料".to_string()),
        };
        assert_eq!(format_activity_row(&a), "|09:00|11:30|清水寺|500円|拝観料|");
    }

    #[test]
    fn cells_stay_on_one_row() {
        let mut a = activity(Some("300"));
        a.content = "お土産\n  八つ橋 | 抹茶".to_string();
        assert_eq!(format_activity_row(&a), "|12:00||お土産 八つ橋 │ 抹茶|300円||");
    }

    #[test]
    fn markdown_marks_in_cells_are_escaped() {
        let a = DayActivity {
            content: "**限定** ランチ".to_string(),
            start_time: "12:00".to_string(),
            finish_time: None,
            budget: Some("1_000".to_string()),
            note: Some("`x` 予約".to_string()),
        };
        assert_eq!(
            format_activity_row(&a),
            r"|12:00||\*\*限定\*\* ランチ|1\_000円|\`x\` 予約|"
        );
    }

    #[test]
    fn selector_with_no_days_is_empty() {
        let mut it = sample_itinerary();
        it.return_date = it.departure_date.pred_opt().unwrap();
        let view = ItineraryView::new(it, DayCountMode::Calendar);
        assert_eq!(format_day_selector(&view), "");
    }

    #[test]
    fn selector_without_selected_day_in_range_has_no_bold() {
        let mut view = ItineraryView::new(sample_itinerary(), DayCountMode::Calendar);
        view.select_day(7);
        assert_eq!(format_day_selector(&view), "1日目 · 2日目 · 3日目");
    }

    #[test]
    fn table_lists_rows_in_order() {
        let it = sample_itinerary();
        let table = format_activity_table(it.activities_for_day(1));
        assert!(table.contains("|**開始**|**終了**|**内容**|**金額**|**備考**|"));
        let first = table.find("新幹線で京都へ").unwrap();
        let second = table.find("旅館にチェックイン").unwrap();
        let third = table.find("昼食").unwrap();
        assert!(first < second && second < third);
        assert!(table.ends_with("|-\n"));
    }

    #[test]
    fn empty_day_table_has_only_header() {
        let table = format_activity_table(&[]);
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn day_heading_includes_date_when_known() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 11);
        assert_eq!(format_day_heading(2, d, "%Y/%m/%d"), "## 2日目 (2024/03/11)");
        assert_eq!(format_day_heading(0, None, "%Y/%m/%d"), "## 0日目");
    }
}

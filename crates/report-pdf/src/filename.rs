use chrono::{DateTime, NaiveDate, Utc};

/// Download name for a rendered report
///
/// `<Title_With_Underscores>_<number>_<YYYY-MM-DD>_<unix millis>.pdf`. The
/// render timestamp keeps repeated renders of the same report apart.
pub fn report_filename(
    title: &str,
    report_number: &str,
    report_date: NaiveDate,
    rendered_at: DateTime<Utc>,
) -> String {
    let mut title = sanitize(title);
    if title.is_empty() {
        title = "report".to_string();
    }

    let number = sanitize(report_number);
    let date = report_date.format("%Y-%m-%d");
    let millis = rendered_at.timestamp_millis();

    if number.is_empty() {
        format!("{}_{}_{}.pdf", title, date, millis)
    } else {
        format!("{}_{}_{}_{}.pdf", title, number, date, millis)
    }
}

fn sanitize(part: &str) -> String {
    part.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect()
}

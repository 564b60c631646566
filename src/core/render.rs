use chrono::Local;

use crate::model::course::Course;
use crate::model::enrollment::Enrollment;
use crate::model::search_response::SearchEntry;

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

// Nullable timestamps render as empty cells, never the text "null".
fn opt_cell(value: &Option<String>) -> String {
    value.as_deref().map(escape_html).unwrap_or_default()
}

/// One table describing the course itself. Column order is fixed.
pub fn render_course_table(course: &Course) -> String {
    let mut html = String::new();
    html.push_str("<table class=\"course\">\n");
    html.push_str(&format!("<caption>{}</caption>\n", escape_html(&course.name)));
    html.push_str(
        "<thead><tr>\
         <th>Course ID</th>\
         <th>Course Name</th>\
         <th>Description</th>\
         <th>Heading</th>\
         <th>Is Published</th>\
         <th>Image</th>\
         </tr></thead>\n",
    );
    html.push_str("<tbody><tr>");
    html.push_str(&format!("<td>{}</td>", course.id));
    html.push_str(&format!("<td>{}</td>", escape_html(&course.name)));
    html.push_str(&format!("<td>{}</td>", opt_cell(&course.description)));
    html.push_str(&format!("<td>{}</td>", escape_html(&course.heading)));
    html.push_str(&format!(
        "<td>{}</td>",
        if course.is_published { "Yes" } else { "No" }
    ));
    html.push_str(&format!(
        "<td><img src=\"{}\" alt=\"{}\" width=\"100\"></td>",
        escape_html(&course.image_url),
        escape_html(&course.name)
    ));
    html.push_str("</tr></tbody>\n</table>\n");
    html
}

/// One table listing the course's enrolled students, one row per enrollment,
/// in received order.
pub fn render_students_table(enrollments: &[Enrollment]) -> String {
    let mut html = String::new();
    html.push_str("<table class=\"students\">\n");
    html.push_str("<caption>Enrolled Students</caption>\n");
    html.push_str(
        "<thead><tr>\
         <th>User ID</th>\
         <th>User Name</th>\
         <th>User Email</th>\
         <th>Enrolled At</th>\
         <th>Completed At</th>\
         <th>Percent Complete</th>\
         <th>Expires At</th>\
         </tr></thead>\n",
    );
    html.push_str("<tbody>\n");
    for enrollment in enrollments {
        html.push_str("<tr>");
        html.push_str(&format!("<td>{}</td>", enrollment.user_id));
        html.push_str(&format!("<td>{}</td>", escape_html(&enrollment.user_name)));
        html.push_str(&format!("<td>{}</td>", escape_html(&enrollment.user_email)));
        html.push_str(&format!("<td>{}</td>", escape_html(&enrollment.enrolled_at)));
        html.push_str(&format!("<td>{}</td>", opt_cell(&enrollment.completed_at)));
        html.push_str(&format!("<td>{}%</td>", enrollment.percent_complete));
        html.push_str(&format!("<td>{}</td>", opt_cell(&enrollment.expires_at)));
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

/// Renders every entry in encounter order, two tables per entry, the course
/// table immediately followed by its own students table.
pub fn render_entries(entries: &[SearchEntry]) -> String {
    let mut html = String::new();
    for entry in entries {
        html.push_str(&render_course_table(&entry.course));
        html.push_str(&render_students_table(&entry.enrollments));
    }
    html
}

/// Wraps region markup into a standalone page for writing to disk.
pub fn render_document(region_html: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Course search results</title></head>\n\
         <body>\n{}<p class=\"generated\">Generated at {}</p>\n</body>\n</html>\n",
        region_html,
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn course() -> Course {
        Course {
            id: 1,
            name: "Intro to Testing".into(),
            description: Some("Basics".into()),
            heading: "Basics".into(),
            is_published: true,
            image_url: "/img/1.png".into(),
        }
    }

    fn enrollment() -> Enrollment {
        Enrollment {
            user_id: 7,
            user_name: "Ann".into(),
            user_email: "ann@x.com".into(),
            enrolled_at: "2024-01-01".into(),
            completed_at: None,
            percent_complete: 80,
            expires_at: None,
        }
    }

    fn cell_texts(table_html: &str) -> Vec<String> {
        let doc = Html::parse_fragment(table_html);
        let td = Selector::parse("tbody td").unwrap();
        doc.select(&td)
            .map(|cell| cell.text().collect::<String>())
            .collect()
    }

    #[test]
    fn course_row_matches_expected_columns() {
        let html = render_course_table(&course());
        let cells = cell_texts(&html);
        assert_eq!(cells[0], "1");
        assert_eq!(cells[1], "Intro to Testing");
        assert_eq!(cells[2], "Basics");
        assert_eq!(cells[3], "Basics");
        assert_eq!(cells[4], "Yes");

        let doc = Html::parse_fragment(&html);
        let img = Selector::parse("td img").unwrap();
        let img = doc.select(&img).next().unwrap();
        assert_eq!(img.value().attr("src"), Some("/img/1.png"));
        assert_eq!(img.value().attr("alt"), Some("Intro to Testing"));
    }

    #[test]
    fn is_published_renders_yes_or_no() {
        let mut c = course();
        assert!(render_course_table(&c).contains("<td>Yes</td>"));
        c.is_published = false;
        assert!(render_course_table(&c).contains("<td>No</td>"));
    }

    #[test]
    fn enrollment_row_matches_expected_columns() {
        let html = render_students_table(&[enrollment()]);
        let cells = cell_texts(&html);
        assert_eq!(
            cells,
            vec!["7", "Ann", "ann@x.com", "2024-01-01", "", "80%", ""]
        );
    }

    #[test]
    fn percent_complete_gets_percent_suffix() {
        let mut e = enrollment();
        e.percent_complete = 0;
        assert!(render_students_table(&[e]).contains("<td>0%</td>"));
    }

    #[test]
    fn missing_description_renders_empty_cell() {
        let mut c = course();
        c.description = None;
        let cells = cell_texts(&render_course_table(&c));
        assert_eq!(cells[2], "");
    }

    #[test]
    fn markup_in_values_is_escaped() {
        let mut c = course();
        c.name = "Tom & Jerry <2>".into();
        c.image_url = "/img/1.png?a=\"b\"".into();
        let html = render_course_table(&c);
        assert!(html.contains("Tom &amp; Jerry &lt;2&gt;"));
        assert!(html.contains("src=\"/img/1.png?a=&quot;b&quot;\""));
        assert!(!html.contains("<2>"));
    }

    #[test]
    fn entries_render_two_tables_each_in_order() {
        let entries = vec![
            SearchEntry {
                course: course(),
                enrollments: vec![enrollment()],
            },
            SearchEntry {
                course: Course {
                    id: 2,
                    name: "Advanced Testing".into(),
                    description: None,
                    heading: "More".into(),
                    is_published: false,
                    image_url: "/img/2.png".into(),
                },
                enrollments: vec![],
            },
        ];
        let html = render_entries(&entries);

        let doc = Html::parse_fragment(&html);
        let table = Selector::parse("table").unwrap();
        let classes: Vec<_> = doc
            .select(&table)
            .map(|t| t.value().attr("class").unwrap_or("").to_string())
            .collect();
        assert_eq!(classes, vec!["course", "students", "course", "students"]);

        let first = html.find("Intro to Testing").unwrap();
        let second = html.find("Advanced Testing").unwrap();
        assert!(first < second);
    }

    #[test]
    fn document_wraps_region_markup() {
        let page = render_document("<table class=\"course\"></table>\n");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<table class=\"course\">"));
        assert!(page.contains("Generated at "));
    }
}

use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  h3 { "Parking Ledger" }
                  nav {
                      ul {
                          li { a href="/" { "Parking lot" } }
                          li { a href="/report.json" { "Report (JSON)" } }
                          li { a href="/report.xlsx" { "Report (Excel)" } }
                      }
                  }
              }
              div class="container" {
                  (content)
              }
            }
        }
    }
}

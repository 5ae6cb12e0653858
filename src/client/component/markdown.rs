use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Renders user-written Markdown such as rehearsal descriptions and song notes.
#[component]
pub fn Markdown(source: String) -> Element {
    let parser = Parser::new_ext(&source, Options::all());
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    rsx!(
        div {
            class: "prose prose-sm max-w-none",
            dangerous_inner_html: "{html_output}"
        }
    )
}

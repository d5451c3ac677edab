//! Builders for Takeout-style Keep note files.

use std::fs;
use std::path::Path;

pub fn weblink_note(title: &str, url: &str, link_title: &str, labels: &[&str]) -> String {
    let labels: Vec<String> = labels
        .iter()
        .map(|l| format!(r#"{{ "name": "{l}" }}"#))
        .collect();
    format!(
        r#"{{
            "color": "DEFAULT",
            "isTrashed": false,
            "isPinned": false,
            "isArchived": false,
            "title": "{title}",
            "textContent": "",
            "annotations": [
                {{ "description": "", "source": "WEBLINK", "title": "{link_title}", "url": "{url}" }}
            ],
            "labels": [ {} ]
        }}"#,
        labels.join(", ")
    )
}

pub fn trashed_note(url: &str) -> String {
    format!(
        r#"{{
            "isTrashed": true,
            "title": "gone",
            "annotations": [ {{ "source": "WEBLINK", "title": "", "url": "{url}" }} ]
        }}"#
    )
}

pub fn two_link_note() -> String {
    r#"{
        "isTrashed": false,
        "title": "two links",
        "annotations": [
            { "source": "WEBLINK", "title": "A", "url": "https://a.example.com" },
            { "source": "WEBLINK", "title": "B", "url": "https://b.example.com" }
        ]
    }"#
    .to_string()
}

pub fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

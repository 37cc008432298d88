//! Rendering of lookup outcomes for the terminal

use shenme_config::OutputFormat;
use shenme_core::Definitions;

use crate::lookup::LookupOutcome;
use crate::output::{NO_DEFINITIONS, render};

fn outcome(definitions: Vec<&str>) -> LookupOutcome {
    LookupOutcome {
        word: "中国".to_string(),
        traditional: "中國".to_string(),
        gloss: "[(zhōng, zhòng), (guó)]".to_string(),
        address: "https://en.wiktionary.org/wiki/%E4%B8%AD%E5%9C%8B?action=raw".to_string(),
        definitions: definitions.into_iter().map(String::from).collect::<Definitions>(),
    }
}

const HEADING: &str = "Obtaining definitions for 中国 [(zhōng, zhòng), (guó)] at \
                       https://en.wiktionary.org/wiki/%E4%B8%AD%E5%9C%8B?action=raw\n";

#[test]
fn test_text() {
    let rendered = render(&outcome(vec!["China", "Middle Kingdom"]), OutputFormat::Text).unwrap();

    assert_eq!(rendered, format!("{HEADING}1. China\n2. Middle Kingdom\n"));
}

#[test]
fn test_text_empty_has_notice() {
    let rendered = render(&outcome(vec![]), OutputFormat::Text).unwrap();

    assert_eq!(rendered, format!("{HEADING}{NO_DEFINITIONS}\n"));
}

#[test]
fn test_html() {
    let rendered = render(&outcome(vec!["China"]), OutputFormat::Html).unwrap();

    assert_eq!(rendered, format!("{HEADING}<ol><li>China</li></ol>\n"));
}

#[test]
fn test_html_empty_has_no_notice() {
    let rendered = render(&outcome(vec![]), OutputFormat::Html).unwrap();

    assert_eq!(rendered, format!("{HEADING}<ol></ol>\n"));
    assert!(!rendered.contains(NO_DEFINITIONS));
}

#[test]
fn test_json() {
    let rendered = render(&outcome(vec!["China", "a \"quoted\" sense"]), OutputFormat::Json).unwrap();

    assert_eq!(rendered, "[\"China\",\"a \\\"quoted\\\" sense\"]\n");
}

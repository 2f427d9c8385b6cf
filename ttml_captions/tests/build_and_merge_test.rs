//! 多语言合并与构建的端到端测试。

use captioning_core::{Cue, PlainCaptionFile};
use ttml_captions::{BuildOptions, TtmlCue, TtmlDocument, parse_ttml};

fn options() -> BuildOptions {
    BuildOptions {
        copyright_year: 2024,
        format: true,
    }
}

fn source_with(texts: &[(u64, u64, &str)]) -> PlainCaptionFile {
    let mut file = PlainCaptionFile::new();
    for (start_ms, stop_ms, text) in texts {
        file.add_cue(Cue::from_ms(*start_ms, *stop_ms, *text));
    }
    file
}

#[test]
fn test_build_single_language_document() {
    let mut document = TtmlDocument::new();
    document
        .add_cues(&source_with(&[(0, 1000, "Hi")]), "en")
        .unwrap();

    let xml = document.build_part(0, 0, &options()).unwrap().to_string();

    assert!(xml.contains(r#"<div xml:lang="en">"#));
    assert!(xml.contains(r#"<p begin="0.000s" id="en0" end="1.000s">Hi</p>"#));
    assert!(xml.contains("<ttm:copyright>Copyright 2024</ttm:copyright>"));
    assert!(xml.contains(r#"ttp:timeBase="media""#));
    // 每个语言 div 以占位行开头
    assert!(xml.contains(r#"<p begin="0.000s" id="en" end="1.000s"></p>"#));
}

#[test]
fn test_build_seeds_divs_with_title_placeholder() {
    let mut document = TtmlDocument::new();
    document.set_title("My Film");
    document
        .add_cues(&source_with(&[(0, 1000, "Hi")]), "en")
        .unwrap();

    let xml = document.build(&options()).unwrap().to_string();

    assert!(xml.contains("<ttm:title>My Film</ttm:title>"));
    assert!(xml.contains(r#"<p begin="0.000s" id="en" end="1.000s">My Film</p>"#));
}

#[test]
fn test_build_partitions_cues_by_language() {
    let mut document = TtmlDocument::new();
    document
        .add_cues(&source_with(&[(0, 1000, "one"), (2000, 3000, "two")]), "en")
        .unwrap();
    document
        .add_cues(&source_with(&[(500, 1500, "un"), (2500, 3500, "deux")]), "fr")
        .unwrap();

    let xml = document.build(&options()).unwrap().to_string();

    assert!(xml.contains(r#"<div xml:lang="en">"#));
    assert!(xml.contains(r#"<div xml:lang="fr">"#));

    // 构建前按开始时间排序：one(0) un(500) two(2000) deux(2500)
    assert!(xml.contains(r#"<p begin="0.000s" id="en0" end="1.000s">one</p>"#));
    assert!(xml.contains(r#"<p begin="0.500s" id="fr1" end="1.500s">un</p>"#));
    assert!(xml.contains(r#"<p begin="2.000s" id="en2" end="3.000s">two</p>"#));
    assert!(xml.contains(r#"<p begin="2.500s" id="fr3" end="3.500s">deux</p>"#));

    // en 的 div 里没有法语字幕
    let en_div = &xml[xml.find(r#"<div xml:lang="en">"#).unwrap()
        ..xml.find(r#"<div xml:lang="fr">"#).unwrap()];
    assert!(!en_div.contains("un"));
}

#[test]
fn test_build_out_of_range_indices_clamp() {
    let mut document = TtmlDocument::new();
    document
        .add_cues(&source_with(&[(0, 1000, "a"), (1000, 2000, "b")]), "en")
        .unwrap();

    let full = document.build_part(0, 1, &options()).unwrap().to_string();
    let clamped_from = document.build_part(-7, 1, &options()).unwrap().to_string();
    let clamped_to = document.build_part(0, 99, &options()).unwrap().to_string();

    assert_eq!(full, clamped_from);
    assert_eq!(full, clamped_to);
}

#[test]
fn test_build_drops_cues_without_matching_div() {
    let mut document = TtmlDocument::new();
    document
        .add_cues(&source_with(&[(0, 1000, "hallo")]), "de")
        .unwrap();
    // 语言标签没有对应 div 的 Cue 被静默丢弃，不报错
    document
        .add_cue(TtmlCue {
            lang: Some("sv".to_string()),
            ..TtmlCue::new("0.000s", "1.000s", "hej")
        })
        .unwrap();

    let xml = document.build(&options()).unwrap().to_string();

    assert!(xml.contains("hallo"));
    assert!(!xml.contains("hej"));
}

#[test]
fn test_build_routes_languages_case_insensitively() {
    let mut document = TtmlDocument::new();
    document.add_cues(&source_with(&[]), "FR").unwrap();
    document
        .add_cue(TtmlCue {
            lang: Some("fr".to_string()),
            stop_ms: 1000,
            ..TtmlCue::new("0.000s", "1.000s", "oui")
        })
        .unwrap();

    let xml = document.build(&options()).unwrap().to_string();

    assert!(xml.contains(r#"<div xml:lang="FR">"#));
    assert!(xml.contains("oui"));
}

#[test]
fn test_build_escapes_text_and_collapses_newlines() {
    let mut document = TtmlDocument::new();
    document
        .add_cues(&source_with(&[(0, 1000, "a <b> &\r\nc")]), "en")
        .unwrap();

    let xml = document.build(&options()).unwrap().to_string();

    assert!(xml.contains("a &lt;b&gt; &amp; c"));
}

#[test]
fn test_build_uses_explicit_copyright_over_default() {
    let mut document = TtmlDocument::new();
    document.set_copyright("© 2020 Example Corp");
    document.add_cues(&source_with(&[]), "en").unwrap();

    let xml = document.build(&options()).unwrap().to_string();

    assert!(xml.contains("© 2020 Example Corp"));
    assert!(!xml.contains("Copyright 2024"));
}

#[test]
fn test_build_replaces_previous_content() {
    let mut document = TtmlDocument::new();
    document.add_cues(&source_with(&[(0, 1000, "first")]), "en").unwrap();
    document.build(&options()).unwrap();
    assert!(document.content().contains("first"));

    document
        .add_cue(TtmlCue {
            lang: Some("en".to_string()),
            start_ms: 1000,
            stop_ms: 2000,
            ..TtmlCue::new("1.000s", "2.000s", "second")
        })
        .unwrap();
    document.build(&options()).unwrap();

    assert!(document.content().contains("second"));
    assert_eq!(document.content().matches("<?xml").count(), 1);
}

#[test]
fn test_build_empty_document_has_empty_body() {
    let mut document = TtmlDocument::new();
    let xml = document.build(&options()).unwrap().to_string();
    assert!(xml.contains("<body/>"));
}

#[test]
fn test_duplicate_merged_language_gets_two_divs() {
    let mut document = TtmlDocument::new();
    document.add_cues(&source_with(&[]), "en").unwrap();
    document
        .add_cues(&source_with(&[(0, 1000, "later wins")]), "en")
        .unwrap();

    let xml = document.build(&options()).unwrap().to_string();

    // 两个语言条目各得到一个 div，Cue 路由到后出现的那个
    assert_eq!(xml.matches(r#"<div xml:lang="en">"#).count(), 2);
    let second_div = &xml[xml.rfind(r#"<div xml:lang="en">"#).unwrap()..];
    assert!(second_div.contains("later wins"));
}

#[test]
fn test_merged_document_roundtrip_through_extraction() {
    let mut document = TtmlDocument::new();
    document
        .add_cues(&source_with(&[(0, 1000, "one"), (1000, 2000, "two")]), "en")
        .unwrap();
    document
        .add_cues(&source_with(&[(0, 1000, "un")]), "fr")
        .unwrap();

    let french = document.language_cues_as_document(Some("fr"));
    assert_eq!(french.cue_count(), 1);
    assert_eq!(french.cue(0).unwrap().text, "un");
    assert_eq!(document.cue_count(), 3);
}

#[test]
fn test_parsed_document_can_be_rebuilt_for_default_language() {
    // 解析出的 Cue 没有语言标签，构建时回退到文档默认语言
    let xml = r#"<tt xmlns:ttp="http://www.w3.org/ns/ttml#parameter" ttp:timeBase="media" ttp:tickRate="1000">
  <body><div><p begin="1000t" end="2000t">Hello</p></div></body>
</tt>"#;
    let mut document = parse_ttml(xml).unwrap();
    document.add_cues(&PlainCaptionFile::new(), "en").unwrap();

    let rebuilt = document.build(&options()).unwrap().to_string();

    assert!(rebuilt.contains(r#"<p begin="1.000s" id="en0" end="2.000s">Hello</p>"#));
}

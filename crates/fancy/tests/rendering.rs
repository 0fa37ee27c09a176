//! End-to-end rendering scenarios, mirroring the showcase program.

use std::collections::{BTreeMap, LinkedList};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use console::strip_ansi_codes;
use insta::assert_snapshot;

use fancy::style::{Attribute, Rgb, Style};
use fancy::{Config, Fancy, Hours, Millis, OutputMode, Plain, Render, Role, Seconds, Span};

const RESET: &str = "\x1b[0m";

fn term() -> Fancy {
    Fancy::new(Config::new().with_output(OutputMode::Term))
}

fn text() -> Fancy {
    Fancy::new(Config::new().with_output(OutputMode::Text))
}

#[test]
fn collections_and_maps() {
    let fancy = term();

    let some_ints = vec![1, 2, 3];
    let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    let some_map = BTreeMap::from([("key1".to_string(), '1'), ("key2".to_string(), '2')]);

    assert_snapshot!(strip_ansi_codes(&fancy.render(&some_ints)), @"[1, 2, 3]");
    assert_snapshot!(strip_ansi_codes(&fancy.render(&list)), @"[1, 2, 3]");
    assert_snapshot!(strip_ansi_codes(&fancy.render(&some_map)), @r#"[{"key1", '1'}, {"key2", '2'}]"#);
}

#[test]
fn mixed_tuple() {
    let fancy = term();
    let tuple = (1, 2, 3.125f32, String::from("String"), 'c');
    assert_snapshot!(strip_ansi_codes(&fancy.render(&tuple)), @r#"{1, 2, 3.125, "String", 'c'}"#);
}

#[test]
fn text_mode_matches_stripped_term_mode() {
    let value = (vec![("a", true)], Span::<Millis>::new(250), Label("x"));
    assert_eq!(
        text().render(&value),
        strip_ansi_codes(&term().render(&value)).to_string()
    );
}

// A small user-defined type that renders through an existing rule.
struct Label(&'static str);

impl Render for Label {
    fn render(&self, out: &mut fancy::Emitter<'_>) {
        self.0.render(out);
    }
}

#[test]
fn durations() {
    let fancy = text();
    assert_eq!(fancy.render(&Span::<Seconds>::new(5)), "5s");
    assert_eq!(fancy.render(&Span::<Millis>::new(250)), "250ms");
    assert_eq!(fancy.render(&Span::<Hours>::new(2)), "2h");
    assert_eq!(fancy.render(&Duration::from_nanos(42)), "42ns");
}

#[test]
fn nested_elements_keep_their_own_styles() {
    let fancy = term();
    let rendered = fancy.render(&vec![(1, "one")]);
    let numeric = Style::new().fg(Rgb(142, 68, 173)).to_string();
    let quoted = Style::new().fg(Rgb(243, 156, 18)).to_string();
    assert!(rendered.contains(&format!("{numeric}1{RESET}")));
    assert!(rendered.contains(&format!("{quoted}\"one\"{RESET}")));
    assert!(rendered.ends_with(RESET));
}

#[test]
fn blinking_text_via_style_objects() {
    let fancy = term();
    let mut out = Vec::new();
    fancy
        .line(&mut out)
        .value(&Attribute::Blink)
        .unwrap()
        .value(&Attribute::Underline)
        .unwrap()
        .value(&Plain("Something blinking"))
        .unwrap()
        .end()
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("\x1b[5m\x1b[4mSomething blinking{RESET}\n")
    );
}

#[test]
fn important_text() {
    let fancy = term();
    let rendered = fancy.render_important("Something important");
    assert!(rendered.starts_with("\x1b[1m\x1b[4m"));
    assert_snapshot!(strip_ansi_codes(&rendered), @r#""Something important""#);
}

#[test]
fn custom_emphasis_style() {
    let config = Config::new().with_style(Role::Emphasis, Style::new().italic().fg(Rgb(9, 9, 9)));
    let fancy = Fancy::new(config);
    assert!(fancy
        .render_important(&1)
        .starts_with("\x1b[38;2;9;9;9m\x1b[3m"));
}

#[test]
fn full_log_lines() {
    let fancy = text();
    let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let mut out = Vec::new();

    fancy
        .line(&mut out)
        .log_time_at(&at)
        .unwrap()
        .message()
        .unwrap()
        .value("Something happened!")
        .unwrap()
        .end()
        .unwrap();
    fancy
        .line(&mut out)
        .log_time_at(&at)
        .unwrap()
        .text("Time elapsed since start: ")
        .unwrap()
        .value(&Span::<Millis>::new(12))
        .unwrap()
        .end()
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[03:04:05] [message] \"Something happened!\"\n\
         [03:04:05] Time elapsed since start: 12ms\n"
    );
}

#[test]
fn rendering_is_stable_across_calls() {
    let fancy = term();
    let value = BTreeMap::from([(1u8, vec!["a", "b"]), (2, vec![])]);
    assert_eq!(fancy.render(&value), fancy.render(&value));
}

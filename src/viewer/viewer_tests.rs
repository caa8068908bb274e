//! Tests for the viewer core.

use super::*;
use crate::model::ControllerButton;
use crate::test_harness::{text, ViewerHarness};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

fn info() -> DisplayConfig {
    DisplayConfig::new("Info")
}

fn numbered_lines(count: usize) -> String {
    (0..count)
        .map(|i| format!("line {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

fn append(path: &PathBuf, text: &str) {
    let mut file = fs::OpenOptions::new().append(true).open(path).unwrap();
    file.write_all(text.as_bytes()).unwrap();
}

// ===== Rendering =====

#[test]
fn message_renders_one_visual_line_per_paragraph() {
    let mut harness = ViewerHarness::new(info(), text("hello\nworld"));
    harness.idle();

    let screen = harness.screen();
    let rows: Vec<&str> = screen.lines().collect();
    assert!(rows[1].starts_with("│hello "), "got: {}", rows[1]);
    assert!(rows[2].starts_with("│world "), "got: {}", rows[2]);
}

#[test]
fn snapshot_message_frame() {
    let mut harness =
        ViewerHarness::with_size(info(), text("hello\nworld"), ViewerSettings::default(), 30, 7);
    harness.idle();

    insta::assert_snapshot!("message_frame", harness.screen());
}

#[test]
fn snapshot_frame_with_yes_button() {
    let config = DisplayConfig::new("Proceed?").with_confirm_button(true);
    let mut harness =
        ViewerHarness::with_size(config, text("Install update"), ViewerSettings::default(), 30, 7);
    harness.idle();

    insta::assert_snapshot!("frame_with_yes_button", harness.screen());
}

#[test]
fn wrapped_text_breaks_at_whitespace() {
    let config = info().with_wrap_lines(true);
    let mut harness = ViewerHarness::with_size(
        config,
        text("the quick brown fox"),
        ViewerSettings::default(),
        14,
        7,
    );
    harness.idle();

    let screen = harness.screen();
    assert!(screen.contains("│the quick "), "got:\n{}", screen);
    assert!(screen.contains("│brown fox "), "got:\n{}", screen);
}

#[test]
fn unwrapped_text_is_cut_at_the_edge() {
    let mut harness = ViewerHarness::with_size(
        info(),
        text("the quick brown fox"),
        ViewerSettings::default(),
        14,
        7,
    );
    harness.idle();

    assert!(harness.screen().contains("│the quick b"));
}

// ===== Exit decisions =====

#[test]
fn cancel_exits_with_cancelled() {
    let mut harness = ViewerHarness::new(info(), text("hello"));

    let outcome = harness.press(KeyCode::Esc);

    assert_eq!(outcome, FrameOutcome::Exit(ExitStatus::Cancelled));
    assert_eq!(outcome.exit_status().map(ExitStatus::code), Some(0));
    assert_eq!(harness.viewer().status(), ViewerStatus::Cancelled);
}

#[test]
fn confirm_with_yes_button_exits_with_confirmed() {
    let config = info().with_confirm_button(true);
    let mut harness = ViewerHarness::new(config, text("hello"));

    let outcome = harness.press(KeyCode::Char('y'));

    assert_eq!(outcome, FrameOutcome::Exit(ExitStatus::Confirmed));
    assert_eq!(outcome.exit_status().map(ExitStatus::code), Some(1));
    assert_eq!(harness.viewer().status(), ViewerStatus::Confirmed);
}

#[test]
fn confirm_without_yes_button_is_ignored() {
    let mut harness = ViewerHarness::new(info(), text("hello"));

    assert_eq!(harness.press(KeyCode::Char('y')), FrameOutcome::Continue);
    assert_eq!(harness.viewer().status(), ViewerStatus::Running);
}

#[test]
fn quit_keys_and_close_request_cancel() {
    let mut harness = ViewerHarness::new(info(), text("hello"));
    assert_eq!(
        harness.press_with(KeyCode::Char('c'), KeyModifiers::CONTROL),
        FrameOutcome::Exit(ExitStatus::Cancelled)
    );

    let mut harness = ViewerHarness::new(info(), text("hello"));
    assert_eq!(
        harness.frame(&[InputEvent::CloseRequested]),
        FrameOutcome::Exit(ExitStatus::Cancelled)
    );

    let mut harness = ViewerHarness::new(info(), text("hello"));
    assert_eq!(
        harness.press(KeyCode::Char('q')),
        FrameOutcome::Exit(ExitStatus::Cancelled)
    );
}

#[test]
fn first_terminal_event_in_a_frame_wins() {
    let config = info().with_confirm_button(true);
    let mut harness = ViewerHarness::new(config, text("hello"));

    let outcome = harness.frame(&[
        InputEvent::Key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE)),
        InputEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
    ]);

    assert_eq!(outcome, FrameOutcome::Exit(ExitStatus::Confirmed));
}

#[test]
fn exit_is_reported_exactly_once() {
    let mut harness = ViewerHarness::new(info(), text("hello"));
    assert!(harness.press(KeyCode::Esc).exit_status().is_some());

    assert_eq!(harness.press(KeyCode::Esc), FrameOutcome::Continue);
    assert_eq!(harness.idle(), FrameOutcome::Continue);
    assert_eq!(harness.viewer().status(), ViewerStatus::Cancelled);
}

#[test]
fn draw_after_exit_renders_nothing() {
    let mut harness = ViewerHarness::new(info(), text("hello"));
    harness.press(KeyCode::Esc);
    assert!(harness.screen().contains("hello"));

    harness.idle();

    assert_eq!(harness.screen(), "");
}

// ===== Buttons =====

#[test]
fn focus_starts_on_close() {
    let harness = ViewerHarness::new(info().with_confirm_button(true), text("x"));
    assert_eq!(harness.viewer().focused_button(), Some(Button::Close));
}

#[test]
fn enter_presses_the_focused_button() {
    let mut harness = ViewerHarness::new(info().with_confirm_button(true), text("x"));
    assert_eq!(
        harness.press(KeyCode::Enter),
        FrameOutcome::Exit(ExitStatus::Cancelled)
    );

    let mut harness = ViewerHarness::new(info().with_confirm_button(true), text("x"));
    harness.press(KeyCode::Tab);
    assert_eq!(harness.viewer().focused_button(), Some(Button::Yes));
    assert_eq!(
        harness.press(KeyCode::Enter),
        FrameOutcome::Exit(ExitStatus::Confirmed)
    );
}

#[test]
fn focus_wraps_around() {
    let mut harness = ViewerHarness::new(info().with_confirm_button(true), text("x"));
    harness.press(KeyCode::BackTab);
    assert_eq!(harness.viewer().focused_button(), Some(Button::Yes));
    harness.press(KeyCode::BackTab);
    assert_eq!(harness.viewer().focused_button(), Some(Button::Close));
}

#[test]
fn single_button_keeps_focus() {
    let mut harness = ViewerHarness::new(info(), text("x"));
    harness.press(KeyCode::Tab);
    assert_eq!(harness.viewer().focused_button(), Some(Button::Close));
}

#[test]
fn clicking_yes_confirms() {
    let mut harness = ViewerHarness::new(info().with_confirm_button(true), text("x"));
    harness.idle();

    let yes = harness
        .viewer()
        .button_areas()
        .iter()
        .find(|hit| hit.button == Button::Yes)
        .map(|hit| hit.area)
        .unwrap();

    assert_eq!(
        harness.click(yes.x + 1, yes.y),
        FrameOutcome::Exit(ExitStatus::Confirmed)
    );
}

#[test]
fn clicking_text_does_nothing() {
    let mut harness = ViewerHarness::new(info(), text("x"));
    harness.idle();
    assert_eq!(harness.click(5, 3), FrameOutcome::Continue);
}

#[test]
fn controller_buttons_drive_the_viewer() {
    let mut harness = ViewerHarness::new(info().with_confirm_button(true), text("x"));
    assert_eq!(
        harness.controller(ControllerButton::Start),
        FrameOutcome::Exit(ExitStatus::Confirmed)
    );

    let mut harness = ViewerHarness::new(info(), text("x"));
    assert_eq!(
        harness.controller(ControllerButton::East),
        FrameOutcome::Exit(ExitStatus::Cancelled)
    );

    let mut harness = ViewerHarness::new(info(), text("x"));
    assert_eq!(
        harness.controller(ControllerButton::South),
        FrameOutcome::Exit(ExitStatus::Cancelled)
    );
}

// ===== Scrolling =====

#[test]
fn scroll_keys_move_and_clamp() {
    // 80x24 leaves 21 text rows, so 100 lines scroll up to offset 79.
    let mut harness = ViewerHarness::new(info(), text(&numbered_lines(100)));
    harness.idle();

    harness.press(KeyCode::Char('j'));
    harness.press(KeyCode::Down);
    assert_eq!(harness.viewer().scroll().vertical(), 2);

    harness.press(KeyCode::End);
    assert_eq!(harness.viewer().scroll().vertical(), 79);
    harness.press(KeyCode::Down);
    assert_eq!(harness.viewer().scroll().vertical(), 79);

    harness.press(KeyCode::PageUp);
    assert_eq!(harness.viewer().scroll().vertical(), 58);

    harness.press(KeyCode::Home);
    harness.press(KeyCode::Up);
    assert_eq!(harness.viewer().scroll().vertical(), 0);
}

#[test]
fn scrolled_view_shows_later_lines() {
    let mut harness = ViewerHarness::new(info(), text(&numbered_lines(100)));
    harness.idle();

    harness.press(KeyCode::End);

    let screen = harness.screen();
    assert!(screen.contains("│line 99 "));
    assert!(!screen.contains("│line 0 "));
}

#[test]
fn short_document_does_not_scroll() {
    let mut harness = ViewerHarness::new(info(), text("one\ntwo"));
    harness.idle();

    harness.press(KeyCode::PageDown);

    assert_eq!(harness.viewer().scroll().vertical(), 0);
}

#[test]
fn shrinking_the_terminal_keeps_offset_in_bounds() {
    let mut harness = ViewerHarness::new(info(), text(&numbered_lines(30)));
    harness.resize(80, 10);
    harness.idle();
    harness.press(KeyCode::End);
    assert_eq!(harness.viewer().scroll().vertical(), 23);

    harness.resize(80, 24);
    harness.idle();

    assert_eq!(harness.viewer().scroll().vertical(), 9);
}

#[test]
fn horizontal_scroll_without_wrapping() {
    let long = "x".repeat(100) + "END";
    let mut harness = ViewerHarness::new(info(), text(&long));
    harness.idle();

    for _ in 0..40 {
        harness.press(KeyCode::Right);
    }

    // 103 columns in a 77-column pane.
    assert_eq!(harness.viewer().scroll().horizontal(), 26);
    assert!(harness.screen().contains("END"));
}

#[test]
fn horizontal_scroll_is_disabled_when_wrapping() {
    let long = "word ".repeat(40);
    let mut harness = ViewerHarness::new(info().with_wrap_lines(true), text(&long));
    harness.idle();

    harness.press(KeyCode::Right);

    assert_eq!(harness.viewer().scroll().horizontal(), 0);
}

#[test]
fn mouse_wheel_scrolls() {
    let mut harness = ViewerHarness::new(info(), text(&numbered_lines(100)));
    harness.idle();

    harness.frame(&[InputEvent::Mouse(crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::ScrollDown,
        column: 10,
        row: 10,
        modifiers: KeyModifiers::NONE,
    })]);

    assert_eq!(harness.viewer().scroll().vertical(), 1);
}

#[test]
fn scroll_step_setting_is_honoured() {
    let settings = ViewerSettings {
        scroll_step: 3,
        ..ViewerSettings::default()
    };
    let mut harness =
        ViewerHarness::with_size(info(), text(&numbered_lines(100)), settings, 80, 24);
    harness.idle();

    harness.press(KeyCode::Down);

    assert_eq!(harness.viewer().scroll().vertical(), 3);
}

// ===== Layout caching =====

#[test]
fn static_content_is_laid_out_once() {
    let mut harness = ViewerHarness::new(info().with_wrap_lines(true), text("some text"));
    for _ in 0..5 {
        harness.idle();
    }
    assert_eq!(harness.viewer().relayout_count(), 1);
}

#[test]
fn resize_relayouts_only_when_wrapping() {
    let mut wrapped = ViewerHarness::new(info().with_wrap_lines(true), text("some text"));
    wrapped.idle();
    wrapped.resize(60, 24);
    wrapped.idle();
    assert_eq!(wrapped.viewer().relayout_count(), 2);

    let mut unwrapped = ViewerHarness::new(info(), text("some text"));
    unwrapped.idle();
    unwrapped.resize(60, 24);
    unwrapped.idle();
    assert_eq!(unwrapped.viewer().relayout_count(), 1);
}

// ===== Live reload =====

#[test]
fn live_reload_shows_appended_lines() {
    let path = std::env::temp_dir().join("tvtext_viewer_live_append.log");
    fs::write(&path, "one\n").unwrap();

    let config = DisplayConfig::new("Live").with_live_reload(true);
    let mut harness =
        ViewerHarness::with_size(config, ViewerContent::Live(path.clone()), ViewerSettings::default(), 40, 10);
    harness.idle();
    let before = harness.screen();

    append(&path, "two\n");
    harness.idle();
    let after = harness.screen();
    let _ = fs::remove_file(&path);

    assert!(before.contains("│one "));
    assert!(!before.contains("│two "));
    assert!(after.contains("│one "));
    assert!(after.contains("│two "));
}

#[test]
fn appended_line_shows_on_the_next_frame() {
    let path = std::env::temp_dir().join("tvtext_viewer_next_frame.log");
    fs::write(&path, "one\n").unwrap();

    let config = DisplayConfig::new("Live").with_live_reload(true);
    let mut harness = ViewerHarness::with_size(
        config,
        ViewerContent::Live(path.clone()),
        ViewerSettings::default(),
        40,
        10,
    );
    harness.idle();

    append(&path, "two\n");
    harness.idle();
    let _ = fs::remove_file(&path);

    assert_eq!(harness.viewer().document().text(), "one\ntwo\n");
    assert!(harness.screen().contains("│two "));
}

#[test]
fn dropped_head_keeps_the_same_text_in_view() {
    let path = std::env::temp_dir().join("tvtext_viewer_dropped_head.log");
    let lines: String = (0..20).map(|i| format!("l{:02}\n", i)).collect();
    fs::write(&path, lines).unwrap();

    // 4-byte lines: the 40-byte window holds l10..l19.
    let settings = ViewerSettings {
        max_reload_bytes: 40,
        ..ViewerSettings::default()
    };
    let config = DisplayConfig::new("Live").with_live_reload(true);
    let mut harness =
        ViewerHarness::with_size(config, ViewerContent::Live(path.clone()), settings, 40, 10);
    harness.idle();
    harness.press(KeyCode::Down);
    harness.press(KeyCode::Down);
    assert_eq!(harness.viewer().scroll().vertical(), 2);

    append(&path, "l20\n");
    harness.idle();
    let _ = fs::remove_file(&path);

    assert!(harness.viewer().document().text().starts_with("l11\n"));
    assert_eq!(harness.viewer().scroll().vertical(), 1);
    let screen = harness.screen();
    let top = screen.lines().nth(1).unwrap();
    assert!(top.starts_with("│l12 "), "got: {}", top);
}

#[test]
fn live_reload_preserves_scroll_position() {
    let path = std::env::temp_dir().join("tvtext_viewer_live_scroll.log");
    fs::write(&path, numbered_lines(50)).unwrap();

    let config = DisplayConfig::new("Live").with_live_reload(true);
    let mut harness =
        ViewerHarness::with_size(config, ViewerContent::Live(path.clone()), ViewerSettings::default(), 40, 10);
    harness.idle();
    for _ in 0..5 {
        harness.press(KeyCode::Down);
    }
    let version = harness.viewer().document().version();

    append(&path, "\nline 50");
    harness.idle();
    let _ = fs::remove_file(&path);

    assert_ne!(harness.viewer().document().version(), version);
    assert_eq!(harness.viewer().bounds().content_height, 51);
    assert_eq!(harness.viewer().scroll().vertical(), 5);
}

#[test]
fn unchanged_file_does_not_bump_the_version() {
    let path = std::env::temp_dir().join("tvtext_viewer_live_unchanged.log");
    fs::write(&path, "same\n").unwrap();

    let config = DisplayConfig::new("Live").with_live_reload(true);
    let mut harness =
        ViewerHarness::with_size(config, ViewerContent::Live(path.clone()), ViewerSettings::default(), 40, 10);
    harness.idle();
    let version = harness.viewer().document().version();
    harness.idle();
    harness.idle();
    let _ = fs::remove_file(&path);

    assert_eq!(harness.viewer().document().version(), version);
    assert_eq!(harness.viewer().relayout_count(), 1);
}

#[test]
fn follow_tail_pins_the_view_to_the_bottom() {
    let path = std::env::temp_dir().join("tvtext_viewer_follow_tail.log");
    fs::write(&path, numbered_lines(50)).unwrap();

    let settings = ViewerSettings {
        follow_tail: true,
        ..ViewerSettings::default()
    };
    let config = DisplayConfig::new("Live").with_live_reload(true);
    // 40x10 leaves 7 text rows.
    let mut harness =
        ViewerHarness::with_size(config, ViewerContent::Live(path.clone()), settings, 40, 10);
    harness.idle();
    assert_eq!(harness.viewer().scroll().vertical(), 43);

    append(&path, "\nline 50");
    harness.idle();
    let _ = fs::remove_file(&path);

    assert_eq!(harness.viewer().scroll().vertical(), 44);
    assert!(harness.screen().contains("│line 50 "));
}

#[test]
fn follow_tail_releases_when_scrolled_up() {
    let path = std::env::temp_dir().join("tvtext_viewer_follow_release.log");
    fs::write(&path, numbered_lines(50)).unwrap();

    let settings = ViewerSettings {
        follow_tail: true,
        ..ViewerSettings::default()
    };
    let config = DisplayConfig::new("Live").with_live_reload(true);
    let mut harness =
        ViewerHarness::with_size(config, ViewerContent::Live(path.clone()), settings, 40, 10);
    harness.idle();
    harness.press(KeyCode::Home);

    append(&path, "\nline 50");
    harness.idle();
    let _ = fs::remove_file(&path);

    assert_eq!(harness.viewer().scroll().vertical(), 0);
}

#[test]
fn failed_reload_keeps_last_good_document() {
    let path = std::env::temp_dir().join("tvtext_viewer_live_failure.log");
    fs::write(&path, "last good output\n").unwrap();

    let config = DisplayConfig::new("Live").with_live_reload(true);
    let mut harness =
        ViewerHarness::with_size(config, ViewerContent::Live(path.clone()), ViewerSettings::default(), 40, 10);
    harness.idle();

    fs::remove_file(&path).unwrap();
    assert_eq!(harness.idle(), FrameOutcome::Continue);
    assert_eq!(harness.idle(), FrameOutcome::Continue);

    assert_eq!(harness.viewer().document().text(), "last good output\n");
    assert!(harness.screen().contains("│last good output"));
    assert!(harness.screen().lines().next().unwrap().ends_with(" LIVE ┐"));
}

#[test]
fn reload_recovers_after_failure() {
    let path = std::env::temp_dir().join("tvtext_viewer_live_recover.log");
    fs::write(&path, "before\n").unwrap();

    let config = DisplayConfig::new("Live").with_live_reload(true);
    let mut harness =
        ViewerHarness::with_size(config, ViewerContent::Live(path.clone()), ViewerSettings::default(), 40, 10);
    harness.idle();
    fs::remove_file(&path).unwrap();
    harness.idle();

    fs::write(&path, "after\n").unwrap();
    harness.idle();
    let _ = fs::remove_file(&path);

    assert_eq!(harness.viewer().document().text(), "after\n");
}

#[test]
fn script_without_live_reload_is_read_once() {
    let path = std::env::temp_dir().join("tvtext_viewer_script_once.log");
    fs::write(&path, "first\n").unwrap();

    let mut harness = ViewerHarness::with_size(
        DisplayConfig::new("Once"),
        ViewerContent::Live(path.clone()),
        ViewerSettings::default(),
        40,
        10,
    );
    harness.idle();
    fs::write(&path, "second\n").unwrap();
    harness.idle();
    let _ = fs::remove_file(&path);

    assert_eq!(harness.viewer().document().text(), "first\n");
    assert!(!harness.screen().contains("LIVE"));
}

#[test]
fn static_content_has_no_live_marker() {
    let mut harness = ViewerHarness::new(info(), text("hello"));
    harness.idle();
    assert!(!harness.screen().contains("LIVE"));
}

// Chunk: docs/chunks/line_document - Line-per-buffer document with cursor

//! Integration tests for realistic editing sequences.
//!
//! These tests verify that lines, their terminators and the cursor stay
//! consistent through typing, splitting and joining.

use mille_buffer::{BufferConfig, Document, Position};

fn assert_terminators_consistent(doc: &Document) {
    let last = doc.line_count() - 1;
    for (i, line) in doc.lines().enumerate() {
        assert_eq!(line.has_terminator(), i != last, "line {} terminator", i);
        assert!(line.buffer().invisible_count() <= 1);
    }
}

#[test]
fn test_type_word_then_delete_entirely() {
    let mut doc = Document::new();

    for ch in "hello".chars() {
        doc.insert_char(ch).unwrap();
    }
    assert_eq!(doc.content(), "hello");
    assert_eq!(doc.cursor_position(), Position::new(0, 5));

    for _ in 0..5 {
        doc.delete_backward().unwrap();
    }
    assert!(doc.is_empty());
    assert_eq!(doc.cursor_position(), Position::new(0, 0));
}

#[test]
fn test_type_multiple_lines_and_navigate() {
    let mut doc = Document::new();

    doc.insert_str("first line").unwrap();
    doc.insert_newline().unwrap();
    doc.insert_str("second line").unwrap();
    doc.insert_newline().unwrap();
    doc.insert_str("third line").unwrap();

    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.line_content(0), "first line");
    assert_eq!(doc.line_content(1), "second line");
    assert_eq!(doc.line_content(2), "third line");
    assert_terminators_consistent(&doc);

    doc.set_cursor(Position::new(1, 7)); // "second |line"
    doc.insert_str("awesome ").unwrap();
    assert_eq!(doc.line_content(1), "second awesome line");

    doc.move_up();
    assert_eq!(doc.cursor_position().line, 0);

    doc.move_down();
    doc.move_down();
    assert_eq!(doc.cursor_position().line, 2);
}

#[test]
fn test_split_and_rejoin_lines() {
    let mut doc: Document = "helloworld".parse().unwrap();

    doc.set_cursor(Position::new(0, 5));
    doc.insert_newline().unwrap();

    assert_eq!(doc.line_count(), 2);
    assert_eq!(doc.content(), "hello\nworld");

    doc.delete_backward().unwrap();

    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.content(), "helloworld");
    assert_eq!(doc.cursor_position(), Position::new(0, 5));
    assert_terminators_consistent(&doc);
}

#[test]
fn test_rapid_insert_delete_cycles() {
    let mut doc = Document::new();

    doc.insert_str("teh").unwrap();
    for _ in 0..3 {
        doc.delete_backward().unwrap();
    }
    doc.insert_str("the").unwrap();
    doc.insert_char(' ').unwrap();

    doc.insert_str("quikc").unwrap();
    doc.delete_backward().unwrap();
    doc.delete_backward().unwrap();
    doc.insert_str("ck").unwrap();

    doc.insert_char(' ').unwrap();
    doc.insert_str("brown fox").unwrap();

    assert_eq!(doc.content(), "the quick brown fox");
}

#[test]
fn test_delete_forward_sequence() {
    let mut doc: Document = "abcdefgh".parse().unwrap();
    doc.set_cursor(Position::new(0, 2));

    for _ in 0..3 {
        doc.delete_forward().unwrap();
    }

    assert_eq!(doc.content(), "abfgh");
    assert_eq!(doc.cursor_position(), Position::new(0, 2));
}

#[test]
fn test_remove_whole_middle_line() {
    let mut doc: Document = "line1\nline2\nline3\nline4".parse().unwrap();
    doc.set_cursor(Position::new(1, 0));

    // Content first, then the terminator
    for _ in 0..6 {
        doc.delete_forward().unwrap();
    }

    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.line_content(0), "line1");
    assert_eq!(doc.line_content(1), "line3");
    assert_eq!(doc.line_content(2), "line4");
    assert_terminators_consistent(&doc);
}

#[test]
fn test_editing_at_line_boundaries() {
    let mut doc: Document = "abc\ndef".parse().unwrap();

    doc.set_cursor(Position::new(0, 3));
    doc.insert_char('!').unwrap();
    assert_eq!(doc.line_content(0), "abc!");
    assert_eq!(doc.line(0).unwrap().to_vec(), vec!['a', 'b', 'c', '!', '\n']);

    doc.move_right();
    assert_eq!(doc.cursor_position(), Position::new(1, 0));

    doc.insert_char('>').unwrap();
    assert_eq!(doc.line_content(1), ">def");
}

#[test]
fn test_empty_line_operations() {
    let mut doc = Document::new();
    doc.insert_str("first\n\n\nlast").unwrap();

    assert_eq!(doc.line_count(), 4);
    assert_eq!(doc.line_content(1), "");
    assert_eq!(doc.line_content(2), "");
    assert_eq!(doc.line_content(3), "last");

    doc.set_cursor(Position::new(1, 0));
    doc.move_down();
    assert_eq!(doc.cursor_position(), Position::new(2, 0));

    doc.insert_str("middle").unwrap();
    assert_eq!(doc.line_content(2), "middle");
    assert_eq!(doc.content(), "first\n\nmiddle\nlast");
    assert_terminators_consistent(&doc);
}

#[test]
fn test_navigation_clamps_at_document_edges() {
    let mut doc: Document = "first\nsecond\nthird".parse().unwrap();

    for _ in 0..100 {
        doc.move_right();
    }
    assert_eq!(doc.cursor_position(), Position::new(2, 5));

    for _ in 0..100 {
        doc.move_left();
    }
    assert_eq!(doc.cursor_position(), Position::new(0, 0));
}

#[test]
fn test_backspace_through_several_lines() {
    let mut doc: Document = "ab\ncd\nef".parse().unwrap();
    doc.set_cursor(Position::new(2, 2));

    // Everything, including the two terminators
    for _ in 0..8 {
        doc.delete_backward().unwrap();
    }
    assert!(doc.is_empty());
    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.cursor_position(), Position::new(0, 0));
}

#[test]
fn test_long_lines_with_tiny_capacity() {
    let config = BufferConfig::new().with_line_capacity(1);
    let mut doc = Document::with_config(config);

    let text = "the quick brown fox\njumps over\nthe lazy dog";
    doc.insert_str(text).unwrap();
    assert_eq!(doc.content(), text);

    doc.set_cursor(Position::new(1, 5));
    doc.insert_newline().unwrap();
    doc.delete_backward().unwrap();
    assert_eq!(doc.content(), text);
    assert_terminators_consistent(&doc);
}

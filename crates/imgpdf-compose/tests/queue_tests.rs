use imgpdf_compose::*;
use std::path::PathBuf;

fn queue_of(names: &[&str]) -> ImageQueue {
    let mut queue = ImageQueue::new();
    queue.extend(names.iter().copied());
    queue
}

fn names(queue: &ImageQueue) -> Vec<String> {
    queue.iter().map(|p| p.display().to_string()).collect()
}

#[test]
fn test_append_keeps_order_and_duplicates() {
    let mut queue = ImageQueue::new();
    assert!(queue.is_empty());

    queue.append("a.png");
    queue.append("b.jpg");
    queue.append("a.png");

    assert_eq!(queue.len(), 3);
    assert_eq!(names(&queue), ["a.png", "b.jpg", "a.png"]);
}

#[test]
fn test_move_first_up_is_noop() {
    let mut queue = queue_of(&["a", "b", "c"]);
    assert_eq!(queue.move_item(0, Direction::Up), Some(0));
    assert_eq!(names(&queue), ["a", "b", "c"]);
}

#[test]
fn test_move_last_down_is_noop() {
    let mut queue = queue_of(&["a", "b", "c"]);
    assert_eq!(queue.move_item(2, Direction::Down), Some(2));
    assert_eq!(names(&queue), ["a", "b", "c"]);
}

#[test]
fn test_move_up_then_down_restores_order() {
    let mut queue = queue_of(&["a", "b", "c", "d"]);

    let index = queue.move_item(2, Direction::Up).unwrap();
    assert_eq!(index, 1);
    assert_eq!(names(&queue), ["a", "c", "b", "d"]);

    let index = queue.move_item(index, Direction::Down).unwrap();
    assert_eq!(index, 2);
    assert_eq!(names(&queue), ["a", "b", "c", "d"]);
}

#[test]
fn test_move_out_of_range() {
    let mut queue = queue_of(&["a"]);
    assert_eq!(queue.move_item(5, Direction::Up), None);
    assert_eq!(ImageQueue::new().move_item(0, Direction::Down), None);
}

#[test]
fn test_move_selected_up_preserves_relative_order() {
    let mut queue = queue_of(&["a", "b", "c", "d", "e"]);

    let moved = queue.move_selected(&[3, 1], Direction::Up);
    assert_eq!(moved, [0, 2]);
    assert_eq!(names(&queue), ["b", "a", "d", "c", "e"]);
}

#[test]
fn test_move_selected_up_blocked_at_top() {
    let mut queue = queue_of(&["a", "b", "c", "d"]);

    // "a" cannot move, so "b" stays below it; "d" still moves
    let moved = queue.move_selected(&[0, 1, 3], Direction::Up);
    assert_eq!(moved, [0, 1, 2]);
    assert_eq!(names(&queue), ["a", "b", "d", "c"]);
}

#[test]
fn test_move_selected_down_adjacent_block() {
    let mut queue = queue_of(&["a", "b", "c", "d"]);

    let moved = queue.move_selected(&[1, 2], Direction::Down);
    assert_eq!(moved, [2, 3]);
    assert_eq!(names(&queue), ["a", "d", "b", "c"]);

    // Now at the bottom: nothing moves
    let moved = queue.move_selected(&moved, Direction::Down);
    assert_eq!(moved, [2, 3]);
    assert_eq!(names(&queue), ["a", "d", "b", "c"]);
}

#[test]
fn test_move_selected_ignores_bad_indices() {
    let mut queue = queue_of(&["a", "b"]);
    let moved = queue.move_selected(&[1, 1, 9], Direction::Up);
    assert_eq!(moved, [0]);
    assert_eq!(names(&queue), ["b", "a"]);
}

#[test]
fn test_snapshot_is_detached() {
    let mut queue = queue_of(&["a", "b"]);
    let snapshot = queue.snapshot();

    queue.move_item(1, Direction::Up);
    queue.append("c");

    assert_eq!(snapshot, vec![PathBuf::from("a"), PathBuf::from("b")]);
    assert_eq!(names(&queue), ["b", "a", "c"]);
}

#[test]
fn test_supported_extensions_case_insensitive() {
    assert!(is_supported_image("photo.PNG"));
    assert!(is_supported_image("/tmp/scan.Jpeg"));
    assert!(is_supported_image("old.bmp"));
    assert!(is_supported_image("anim.GIF"));
    assert!(!is_supported_image("doc.pdf"));
    assert!(!is_supported_image("README"));
    assert!(!is_supported_image("archive.png.zip"));
}

#[test]
fn test_partition_supported_keeps_order() {
    let (accepted, rejected) =
        partition_supported(["b.jpg", "notes.txt", "a.PNG", "movie.mp4", "c.gif"]);

    assert_eq!(
        accepted,
        vec![
            PathBuf::from("b.jpg"),
            PathBuf::from("a.PNG"),
            PathBuf::from("c.gif")
        ]
    );
    assert_eq!(
        rejected,
        vec![PathBuf::from("notes.txt"), PathBuf::from("movie.mp4")]
    );
}

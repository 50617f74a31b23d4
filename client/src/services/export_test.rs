use super::*;

#[test]
fn file_name_replaces_spaces_with_underscores() {
    assert_eq!(export_file_name("New Session"), "New_Session.png");
}

#[test]
fn file_name_collapses_whitespace_runs() {
    assert_eq!(export_file_name("High  Press\tDrill"), "High_Press_Drill.png");
}

#[test]
fn file_name_keeps_leading_and_trailing_markers() {
    assert_eq!(export_file_name(" edges "), "_edges_.png");
}

#[test]
fn file_name_without_whitespace_is_untouched() {
    assert_eq!(export_file_name("Rondo4v2"), "Rondo4v2.png");
}

#[test]
fn file_name_of_empty_name_is_just_extension() {
    assert_eq!(export_file_name(""), ".png");
}

#[test]
fn export_is_unavailable_off_browser() {
    let result = export_png("board-canvas", "New Session");
    assert!(matches!(result, Err(ExportError::Unavailable)));
}

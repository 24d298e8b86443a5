/// Split `path:LINE` into the path and its 1-based line number.
///
/// Anything after the last colon that isn't a positive number stays part
/// of the path.
pub fn parse_filepath_with_line(filepath_arg: &str) -> (String, Option<usize>) {
    if let Some((path_part, line_part)) = filepath_arg.rsplit_once(':') {
        match line_part.parse::<usize>() {
            Ok(line_num) if line_num > 0 && !path_part.is_empty() => {
                (path_part.to_string(), Some(line_num))
            }
            _ => (filepath_arg.to_string(), None),
        }
    } else {
        (filepath_arg.to_string(), None)
    }
}

/// Maximum width of a generated comment line, prefix included
const COMMENT_WIDTH: usize = 80;

const COMMENT_PREFIX: &str = "// ";

/// Render a description as `//` comment lines wrapped at 80 columns.
/// Each source line is wrapped independently, blank lines are kept.
pub fn comment(text: &str) -> Vec<String> {
    let width = COMMENT_WIDTH - COMMENT_PREFIX.len();
    let mut lines = Vec::new();

    for paragraph in text.trim_end().split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if !line.is_empty() && line.len() + 1 + word.len() > width {
                lines.push(format!("{}{}", COMMENT_PREFIX, line));
                line.clear();
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }

        if line.is_empty() {
            lines.push(COMMENT_PREFIX.trim_end().to_string());
        } else {
            lines.push(format!("{}{}", COMMENT_PREFIX, line));
        }
    }

    lines
}

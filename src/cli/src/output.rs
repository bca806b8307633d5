//! Formatting helpers for CLI output.

use comfy_table::{ContentArrangement, Table};

/// Create a styled table with the given headers.
pub fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_header(headers);
    table
}

/// Render an argv as a copy-pasteable POSIX shell command.
///
/// Arguments made only of characters the shell leaves alone are printed
/// as-is; anything else is single-quoted.
pub fn format_command(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| quote_arg(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_./=:,@%+-".contains(c)
}

fn quote_arg(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }
    if arg.chars().all(is_shell_safe) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Indent every line of `text` by `width` spaces.
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_command_plain() {
        let cmd = format_command(&argv(&["podman", "build", "-t", "dev-container", "."]));
        assert_eq!(cmd, "podman build -t dev-container .");
    }

    #[test]
    fn test_format_command_quotes_spaces() {
        let cmd = format_command(&argv(&["docker", "build", "-f", "my dir/Dockerfile", "."]));
        assert_eq!(cmd, "docker build -f 'my dir/Dockerfile' .");
    }

    #[test]
    fn test_format_command_quotes_single_quote() {
        assert_eq!(format_command(&argv(&["it's"])), r"'it'\''s'");
    }

    #[test]
    fn test_format_command_quotes_shell_metacharacters() {
        let cmd = format_command(&argv(&[
            "podman", "build", "-t", "$TAG", "a;b", "x|y", "*", "c\\d",
        ]));
        assert_eq!(cmd, r"podman build -t '$TAG' 'a;b' 'x|y' '*' 'c\d'");
    }

    #[test]
    fn test_format_command_keeps_safe_args() {
        let cmd = format_command(&argv(&[
            "--security-opt=label=disable",
            "repo/img:1.0",
            "a,b@c%d+e",
        ]));
        assert_eq!(cmd, "--security-opt=label=disable repo/img:1.0 a,b@c%d+e");
    }

    #[test]
    fn test_format_command_empty_arg() {
        assert_eq!(format_command(&argv(&["docker", ""])), "docker ''");
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent("a\nb", 2), "  a\n  b");
        assert_eq!(indent("", 4), "");
    }

    #[test]
    fn test_new_table_renders_headers() {
        let mut table = new_table(&["ENGINE", "MOUNT OPTIONS"]);
        table.add_row(vec!["docker", "type=bind,z"]);
        let rendered = table.to_string();
        assert!(rendered.contains("ENGINE"));
        assert!(rendered.contains("type=bind,z"));
    }
}

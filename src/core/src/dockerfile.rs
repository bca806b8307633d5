//! Dockerfile rewriting.
//!
//! No parse tree is built. The only thing recognized is a `RUN --mount=`
//! directive whose option list ends in `,z` before whitespace or a line
//! continuation; the `,z` is cut out and every other byte is kept.

use std::sync::LazyLock;

use regex::Regex;

/// `RUN`, whitespace, `--mount=`, anything up to the first backslash, then
/// `,z` followed by whitespace or a backslash.
static RELABEL_MOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(RUN\s+--mount=[^\\]*),z(\s|\\)").expect("relabel mount pattern is valid")
});

/// Remove the `z` relabel flag from `RUN --mount=...,z` directives.
///
/// Text without a matching directive is returned unchanged. The replacement
/// is repeated until nothing matches, so a directive carrying several `,z`
/// options loses all of them and the result is stable under a second call.
pub fn fix_dockerfile_content(content: &str) -> String {
    rewrite_relabel_mounts(content).0
}

/// Count the `,z` flags [`fix_dockerfile_content`] would remove.
pub fn count_relabel_mounts(content: &str) -> usize {
    rewrite_relabel_mounts(content).1
}

/// Rewrite `content`, returning the fixed text and the number of flags removed.
fn rewrite_relabel_mounts(content: &str) -> (String, usize) {
    let mut fixed = content.to_string();
    let mut passes = 0usize;
    let mut removed = 0usize;

    // Passes are not directives: `[^\\]*` spans newlines, so one match can
    // cover several single-line directives and only drop the last flag.
    // Each pass removes at least one flag, so this terminates.
    while RELABEL_MOUNT_RE.is_match(&fixed) {
        removed += RELABEL_MOUNT_RE.find_iter(&fixed).count();
        fixed = RELABEL_MOUNT_RE
            .replace_all(&fixed, "${1}${2}")
            .into_owned();
        passes += 1;
    }

    if removed > 0 {
        tracing::debug!(passes, removed, "Removed relabel flag from mount directives");
    }

    (fixed, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEATURE_DOCKERFILE: &str = "
FROM ubuntu:latest
RUN --mount=type=bind,from=dev_containers_feature_content_source,source=hello_0,target=/tmp/build-features-src/hello_0,z \\
    cp -ar /tmp/build-features-src/hello_0 /tmp/dev-container-features
";

    #[test]
    fn test_removes_flag_before_continuation() {
        let input = "RUN --mount=type=bind,from=x,source=a,target=b,z \\\n    cp a b\n";
        let fixed = fix_dockerfile_content(input);
        assert_eq!(
            fixed,
            "RUN --mount=type=bind,from=x,source=a,target=b \\\n    cp a b\n"
        );
    }

    #[test]
    fn test_feature_dockerfile() {
        let fixed = fix_dockerfile_content(FEATURE_DOCKERFILE);
        assert!(!fixed.contains(",z "));
        assert!(fixed.contains("target=/tmp/build-features-src/hello_0 \\"));
        assert!(fixed.starts_with("\nFROM ubuntu:latest\n"));
        assert!(fixed.ends_with("/tmp/dev-container-features\n"));
        assert_eq!(fixed.len(), FEATURE_DOCKERFILE.len() - 2);
    }

    #[test]
    fn test_flag_directly_before_backslash() {
        let fixed = fix_dockerfile_content("RUN --mount=type=bind,target=/t,z\\\n  true");
        assert_eq!(fixed, "RUN --mount=type=bind,target=/t\\\n  true");
    }

    #[test]
    fn test_single_line_directive() {
        let fixed = fix_dockerfile_content("RUN\t--mount=type=bind,target=/t,z make\n");
        assert_eq!(fixed, "RUN\t--mount=type=bind,target=/t make\n");
    }

    #[test]
    fn test_every_directive_is_fixed() {
        let input = "FROM alpine\n\
RUN --mount=type=bind,source=a,target=/a,z \\\n    ls /a\n\
RUN --mount=type=bind,source=b,target=/b,z \\\n    ls /b\n";
        let fixed = fix_dockerfile_content(input);
        assert_eq!(count_relabel_mounts(input), 2);
        assert_eq!(count_relabel_mounts(&fixed), 0);
        assert!(fixed.contains("target=/a \\"));
        assert!(fixed.contains("target=/b \\"));
    }

    #[test]
    fn test_no_match_is_identity() {
        let inputs = [
            "",
            "FROM alpine\nRUN echo hi\n",
            "RUN --mount=type=bind,source=a,target=b,zz \\\n  ls\n",
            "RUN --mount=type=cache,target=/root/.cache \\\n  pip install z\n",
            "RUN --mount=type=bind,target=/b,z",
            "RUN --mount=type=bind,target=/b,Z \\\n  ls\n",
            "COPY --mount=type=bind,target=/b,z \\\n",
            "RUN echo --mount=x \\\n ,z \n",
        ];
        for input in inputs {
            assert_eq!(fix_dockerfile_content(input), input, "input: {input:?}");
        }
    }

    #[test]
    fn test_flag_after_continuation_is_untouched() {
        let input = "RUN --mount=type=bind,target=/a \\\n  --mount=type=bind,target=/b,z \\\n  ls\n";
        assert_eq!(fix_dockerfile_content(input), input);
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            FEATURE_DOCKERFILE,
            "RUN --mount=type=bind,source=a,z,z \\\n  ls\n",
            "RUN --mount=type=bind,source=a,z b,z \\\n  ls\n",
            "RUN echo ok\n",
        ];
        for input in inputs {
            let once = fix_dockerfile_content(input);
            assert_eq!(fix_dockerfile_content(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_single_line_directives_are_each_counted() {
        let input = "RUN --mount=type=bind,target=/a,z ls\nRUN --mount=type=bind,target=/b,z ls\n";
        assert_eq!(count_relabel_mounts(input), 2);
        assert_eq!(
            fix_dockerfile_content(input),
            "RUN --mount=type=bind,target=/a ls\nRUN --mount=type=bind,target=/b ls\n"
        );
    }

    #[test]
    fn test_count_matches_removed_bytes() {
        let input = "RUN --mount=type=bind,source=a,z,z \\\n  ls\n\
RUN --mount=type=bind,target=/c,z make\n";
        let fixed = fix_dockerfile_content(input);
        assert_eq!(count_relabel_mounts(input), (input.len() - fixed.len()) / 2);
        assert_eq!(count_relabel_mounts(input), 3);
        assert_eq!(count_relabel_mounts(&fixed), 0);
    }

    #[test]
    fn test_repeated_flags_are_all_removed() {
        let fixed = fix_dockerfile_content("RUN --mount=type=bind,source=a,z,z \\\n  ls\n");
        assert_eq!(fixed, "RUN --mount=type=bind,source=a \\\n  ls\n");
    }
}

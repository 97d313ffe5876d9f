mod support;

use char_generators::template::HEADER;
use char_generators::{
    render_dispatch_body, render_global_artifact, render_private_artifact, GenerationTarget,
    Visibility, DEFAULT_OPTIMIZE_FOR,
};
use support::{body_lines, parse_char_literal, parse_dispatch, parse_string_literal};

#[test]
fn test_global_digits_without_namespace() {
    let target = GenerationTarget::new("Foo", "")
        .with_optimize_for("0123456789")
        .with_global(true);
    let source = render_global_artifact(&target.scope_path, &target.optimize_for);

    assert!(source.starts_with(HEADER));
    assert!(!source.contains("namespace"));

    let lines = body_lines(&source);
    assert_eq!(lines[1], "public static partial class CharExtensions");
    assert_eq!(lines[3], "    public static string ToStringFast(this char value)");

    let table = parse_dispatch(&source);
    assert!(table.has_fallback);
    let expected: Vec<(char, String)> = ('0'..='9').map(|c| (c, c.to_string())).collect();
    assert_eq!(table.arms, expected);
}

#[test]
fn test_private_default_set_in_namespace() {
    let target = GenerationTarget::new("Bar", "NS").with_optimize_for("");
    let source = render_private_artifact(&target);

    let lines = body_lines(&source);
    assert_eq!(lines[1], "namespace NS");
    assert_eq!(lines[2], "{");
    assert_eq!(lines[3], "    public partial class Bar");
    assert_eq!(lines[5], "        private string CharToStringFast(char value)");
    assert_eq!(lines.last(), Some(&"}"));

    let table = parse_dispatch(&source);
    assert_eq!(table.arms.len(), 95);
    assert_eq!(table.arms.first(), Some(&(' ', " ".to_string())));
    assert_eq!(table.arms.last(), Some(&('~', "~".to_string())));
    let arm_chars: String = table.arms.iter().map(|(c, _)| *c).collect();
    assert_eq!(arm_chars, DEFAULT_OPTIMIZE_FOR);
    assert!(table.has_fallback);
}

#[test]
fn test_special_characters_reparse() {
    let target = GenerationTarget::new("Quotes", "").with_optimize_for("'\"\\");
    let source = render_private_artifact(&target);

    assert!(source.contains("    '\\'' => \"'\",\n"));
    assert!(source.contains("    '\"' => \"\\\"\",\n"));
    assert!(source.contains("    '\\\\' => \"\\\\\",\n"));

    let table = parse_dispatch(&source);
    assert_eq!(
        table.arms,
        vec![
            ('\'', "'".to_string()),
            ('"', "\"".to_string()),
            ('\\', "\\".to_string()),
        ]
    );
}

#[test]
fn test_fallback_matches_native_conversion() {
    let table = parse_dispatch(&render_dispatch_body(&['a', 'b']));
    assert_eq!(table.evaluate('a'), "a");
    assert_eq!(table.evaluate('z'), "z");
    assert_eq!(table.evaluate('\u{00E9}'), "\u{00E9}");
}

#[test]
fn test_private_artifact_keeps_declared_visibility() {
    for (visibility, keywords) in [
        (Visibility::Public, "public"),
        (Visibility::Internal, "internal"),
        (Visibility::Private, "private"),
        (Visibility::Protected, "protected"),
        (Visibility::ProtectedInternal, "protected internal"),
        (Visibility::PrivateProtected, "private protected"),
    ] {
        let target = GenerationTarget::new("Nested", "")
            .with_visibility(visibility)
            .with_optimize_for("x");
        let source = render_private_artifact(&target);
        let expected = format!("\n{} partial class Nested\n", keywords);
        assert!(source.contains(&expected), "missing {:?}", expected);
    }
}

#[test]
fn test_global_ignores_declaration_visibility() {
    let target = GenerationTarget::new("Hidden", "Lib")
        .with_visibility(Visibility::Internal)
        .with_global(true);
    let source = render_global_artifact(&target.scope_path, &target.optimize_for);
    assert!(source.contains("    public static partial class CharExtensions\n"));
    assert!(!source.contains("Hidden"));
}

#[test]
fn test_literal_helpers_reject_unescaped_quotes() {
    assert_eq!(parse_char_literal("'''"), None);
    assert_eq!(parse_string_literal("\"\"\""), None);
    assert_eq!(parse_char_literal("'\\u2028'"), Some('\u{2028}'));
}

#[test]
fn test_rendering_is_deterministic() {
    let target = GenerationTarget::new("Foo", "A.B").with_optimize_for("xyz'\"\\");
    assert_eq!(render_private_artifact(&target), render_private_artifact(&target));
    assert_eq!(
        render_global_artifact("A.B", &target.optimize_for),
        render_global_artifact("A.B", &target.optimize_for)
    );
}

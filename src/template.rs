//! Artifact templates wrapping the dispatch body.
//!
//! Two shapes are emitted:
//!
//! - **Global**: a `public static partial class CharExtensions` holding the
//!   extension method `ToStringFast(this char value)`, shared by every
//!   declaration in the same scope.
//! - **Private**: a partial part of the requesting declaration itself (same
//!   name, same accessibility) holding `private string CharToStringFast(char value)`.
//!
//! Both start with [`HEADER`] and are wrapped in a `namespace` block only when
//! the scope path is non-empty.
//!
//! ## Examples
//!
//! ```rust
//! use char_generators::render_global_artifact;
//!
//! let source = render_global_artifact("", &['0']);
//! assert!(source.contains("public static partial class CharExtensions"));
//! assert!(source.contains("public static string ToStringFast(this char value)"));
//! assert!(!source.contains("namespace"));
//! ```

use crate::render::write_dispatch_body;
use crate::{GenerationTarget, GeneratorOptions};

/// Auto-generated banner and nullable context opening every artifact.
pub const HEADER: &str = "\
//------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by the CharGenerators source generator.
//
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>
//------------------------------------------------------------------------------

#nullable enable
";

/// Preprocessor symbol a host defines to compile the embedded marker definition.
pub const EMBED_ATTRIBUTES_SYMBOL: &str = "CHARGENERATORS_EMBED_ATTRIBUTES";

/// Conditional symbol attached to the marker so its usages are stripped from
/// compiled output.
pub const USAGES_SYMBOL: &str = "CHARGENERATORS_USAGES";

const GLOBAL_METHOD: &str = "public static string ToStringFast(this char value)";
const PRIVATE_METHOD: &str = "private string CharToStringFast(char value)";

/// Writes the namespace opening when `scope_path` is set and returns the
/// nesting level for the content that follows.
fn write_namespace_opening(output: &mut String, scope_path: &str) -> usize {
    if scope_path.is_empty() {
        return 0;
    }
    output.push_str("namespace ");
    output.push_str(scope_path);
    output.push_str("\n{\n");
    1
}

fn write_namespace_ending(output: &mut String, scope_path: &str) {
    if !scope_path.is_empty() {
        output.push_str("}\n");
    }
}

/// Writes the complete artifact: header, optional namespace, one class holding
/// one method whose body is the dispatch expression.
fn write_artifact(
    output: &mut String,
    options: &GeneratorOptions,
    scope_path: &str,
    class_declaration: &str,
    method_signature: &str,
    characters: &[char],
) {
    output.push_str(HEADER);
    output.push('\n');

    let level = write_namespace_opening(output, scope_path);
    let class_indent = options.indentation(level);
    let member_indent = options.indentation(level + 1);

    output.push_str(&class_indent);
    output.push_str(class_declaration);
    output.push('\n');
    output.push_str(&class_indent);
    output.push_str("{\n");

    output.push_str(&member_indent);
    output.push_str(method_signature);
    output.push('\n');
    write_dispatch_body(
        output,
        characters,
        &options.indentation(level + 2),
        &options.indentation(1),
    );

    output.push_str(&class_indent);
    output.push_str("}\n");
    write_namespace_ending(output, scope_path);
}

/// Renders the shared extension class for `scope_path`.
#[must_use]
pub fn render_global_artifact(scope_path: &str, characters: &[char]) -> String {
    render_global_artifact_with_options(scope_path, characters, &GeneratorOptions::default())
}

/// Renders the shared extension class for `scope_path` using custom options.
#[must_use]
pub fn render_global_artifact_with_options(
    scope_path: &str,
    characters: &[char],
    options: &GeneratorOptions,
) -> String {
    let class_declaration = format!("public static partial class {}", options.artifact_name);
    let mut output = String::with_capacity(1024 + characters.len() * 32);
    write_artifact(
        &mut output,
        options,
        scope_path,
        &class_declaration,
        GLOBAL_METHOD,
        characters,
    );
    output
}

/// Renders the private helper as a partial part of the requesting declaration.
///
/// # Examples
///
/// ```rust
/// use char_generators::{render_private_artifact, GenerationTarget, Visibility};
///
/// let target = GenerationTarget::new("Bar", "NS")
///     .with_visibility(Visibility::Internal)
///     .with_optimize_for("ab");
/// let source = render_private_artifact(&target);
///
/// assert!(source.contains("namespace NS\n{\n"));
/// assert!(source.contains("    internal partial class Bar\n"));
/// assert!(source.contains("private string CharToStringFast(char value)"));
/// ```
#[must_use]
pub fn render_private_artifact(target: &GenerationTarget) -> String {
    render_private_artifact_with_options(target, &GeneratorOptions::default())
}

/// Renders the private helper using custom options.
#[must_use]
pub fn render_private_artifact_with_options(
    target: &GenerationTarget,
    options: &GeneratorOptions,
) -> String {
    let class_declaration = format!("{} partial class {}", target.visibility, target.name);
    let mut output = String::with_capacity(1024 + target.optimize_for.len() * 32);
    write_artifact(
        &mut output,
        options,
        &target.scope_path,
        &class_declaration,
        PRIVATE_METHOD,
        &target.optimize_for,
    );
    output
}

/// Renders the artifact matching the target's mode.
#[must_use]
pub fn render_target(target: &GenerationTarget, options: &GeneratorOptions) -> String {
    if target.global {
        render_global_artifact_with_options(&target.scope_path, &target.optimize_for, options)
    } else {
        render_private_artifact_with_options(target, options)
    }
}

/// Renders the marker attribute definition.
///
/// The definition is compiled only when the host defines
/// [`EMBED_ATTRIBUTES_SYMBOL`]; otherwise the host is expected to reference a
/// prebuilt attributes assembly.
///
/// # Examples
///
/// ```rust
/// use char_generators::{render_attribute_artifact, GeneratorOptions};
///
/// let source = render_attribute_artifact(&GeneratorOptions::default());
/// assert!(source.contains("public class CharExtensionsAttribute : System.Attribute"));
/// assert!(source.contains("public string? OptimizeFor { get; set; }"));
/// ```
#[must_use]
pub fn render_attribute_artifact(options: &GeneratorOptions) -> String {
    let namespace = options.marker_namespace();
    let mut output = String::with_capacity(1536);
    output.push_str(HEADER);
    output.push('\n');
    output.push_str("#if ");
    output.push_str(EMBED_ATTRIBUTES_SYMBOL);
    output.push('\n');

    let level = write_namespace_opening(&mut output, namespace);
    let class_indent = options.indentation(level);
    let member_indent = options.indentation(level + 1);

    let lines = [
        (
            &class_indent,
            "[System.AttributeUsage(System.AttributeTargets.Class, AllowMultiple = false, Inherited = false)]".to_string(),
        ),
        (
            &class_indent,
            format!("[System.Diagnostics.Conditional(\"{}\")]", USAGES_SYMBOL),
        ),
        (
            &class_indent,
            format!(
                "public class {} : System.Attribute",
                options.marker_short_name()
            ),
        ),
        (&class_indent, "{".to_string()),
        (&member_indent, "/// <summary>".to_string()),
        (
            &member_indent,
            "/// Generate the switch for the listed characters.".to_string(),
        ),
        (&member_indent, "/// </summary>".to_string()),
        (
            &member_indent,
            "public string? OptimizeFor { get; set; }".to_string(),
        ),
        (&member_indent, String::new()),
        (&member_indent, "/// <summary>".to_string()),
        (
            &member_indent,
            format!(
                "/// If set to <c>true</c>, the <c>ToStringFast</c> extension method is generated on <c>{}</c>.",
                options.artifact_name
            ),
        ),
        (
            &member_indent,
            "/// If set to <c>false</c>, a private <c>CharToStringFast(char value)</c> helper method is generated.".to_string(),
        ),
        (&member_indent, "/// </summary>".to_string()),
        (&member_indent, "public bool Global { get; set; }".to_string()),
        (&class_indent, "}".to_string()),
    ];
    for (indent, line) in lines {
        if !line.is_empty() {
            output.push_str(indent);
            output.push_str(&line);
        }
        output.push('\n');
    }

    write_namespace_ending(&mut output, namespace);
    output.push_str("#endif\n");
    output
}

use crate::mapping::GlyphMap;

/// Generates the self-decoding PowerShell loader for a glyph payload.
///
/// The loader embeds three literals: the payload (`$e`), the consumed glyph
/// table in symbol order (`$k`), and the symbol table (`$v`, base64 alphabet
/// plus `=`). At run time it rebuilds the reverse lookup by slicing `$k` at a
/// fixed two-UTF-16-unit stride, accumulates the recovered base64 string in a
/// `StringBuilder` (payloads can be tens of megabytes, so `+=` concatenation
/// is off the table), decodes it, and executes the result. The execution
/// statement is guarded on non-empty text; `Invoke-Expression` rejects an
/// empty string, and an empty payload must run as a no-op.
///
/// Generation is pure templating; nothing is executed here. No escaping is
/// needed: every glyph is astral by construction and the symbol table is
/// limited to `A-Za-z0-9+/=`, none of which PowerShell treats specially
/// inside a double-quoted literal. An empty payload produces a loader whose
/// execution is a no-op.
pub fn generate_loader(payload: &str, map: &GlyphMap) -> String {
    let glyphs = map.glyph_table();
    let symbols = map.symbol_table();
    format!(
        r#"# GlyphScript Fast Loader
$e = "{payload}"
$k = "{glyphs}"
$v = "{symbols}"
$m = @{{}}
for ($i = 0; $i -lt $v.Length; $i++) {{
    $m[$k.Substring($i*2, 2)] = $v[$i]
}}
$sb = New-Object System.Text.StringBuilder
for ($i = 0; $i -lt $e.Length; $i+=2) {{
    [void]$sb.Append($m[$e.Substring($i, 2)])
}}
$s = [System.Text.Encoding]::UTF8.GetString([System.Convert]::FromBase64String($sb.ToString()))
if ($s) {{ Invoke-Expression $s }}"#
    )
}

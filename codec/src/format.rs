/// Render a packed byte sequence as a C source array literal.
///
/// Values are decimal, comma-and-space separated, with a line break and
/// 4-space indent after every `bytes_per_line`-th value except following the
/// final one. The break lands after the separator, so full lines keep their
/// trailing `", "`. Caller guarantees `bytes_per_line >= 1`.
pub fn format_c_array(
    data: &[u8],
    array_name: &str,
    bytes_per_line: usize,
    width: u32,
    height: u32,
) -> String {
    // ~4 chars per value plus header and footer
    let mut out = String::with_capacity(data.len() * 4 + 128);

    out.push_str(&format!(
        "// RGB565 format, {width}x{height}px, byte-swapped\n"
    ));
    out.push_str(&format!("const uint8_t {array_name}[] = {{\n    "));

    let mut line_len = 0;
    for (i, byte) in data.iter().enumerate() {
        out.push_str(&byte.to_string());
        let last = i + 1 == data.len();
        if !last {
            out.push_str(", ");
        }
        line_len += 1;
        if line_len >= bytes_per_line && !last {
            out.push_str("\n    ");
            line_len = 0;
        }
    }

    out.push_str("\n};\n");
    out.push_str(&format!("\n// Image size: {width}x{height} pixels\n"));
    out.push_str(&format!("// Data size: {} bytes\n", data.len()));
    out
}

//! C source listing emission.

use epd_codec::PackedBuffer;

/// Render a packed buffer as a C byte-array declaration.
///
/// The layout is fixed: a byte-count comment, the declaration line, rows of
/// `bytes_per_line` uppercase `0xHH` values indented four spaces and
/// comma-terminated (including the last row), and a closing `};` line. The
/// verification reader scrapes exactly these `0xHH` tokens back out, so the
/// format must stay stable.
pub fn render(buffer: &PackedBuffer, var_name: &str, bytes_per_line: usize) -> String {
    let bytes = buffer.bytes();
    let bytes_per_line = bytes_per_line.max(1);
    let mut output = Vec::with_capacity(bytes.len() / bytes_per_line + 3);
    output.push(format!("// Image size: {} bytes", bytes.len()));
    output.push(format!(
        "const unsigned char {}[{}] = {{",
        var_name,
        bytes.len()
    ));

    for line in bytes.chunks(bytes_per_line) {
        let hex: Vec<String> = line.iter().map(|b| format!("0x{b:02X}")).collect();
        output.push(format!("    {},", hex.join(", ")));
    }

    output.push("};".to_string());
    output.join("\n")
}

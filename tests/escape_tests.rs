use patfmt::{escape, escape_str, Context};

#[test]
fn test_tex_structure_escaped_in_both_contexts() {
    for context in [Context::Text, Context::Data] {
        assert_eq!(escape('\\', context), "\\bks ");
        assert_eq!(escape('{', context), "\\lbr ");
        assert_eq!(escape('}', context), "\\rbr ");
    }
}

#[test]
fn test_text_context() {
    assert_eq!(escape_str("#_'`\" ", Context::Text), "\\#\\_\\csq \\grv \\dqt \\spc ");
}

#[test]
fn test_data_context() {
    assert_eq!(escape_str("#_'`\" ", Context::Data), "\\hsh _\\apo `\"\\lspc ");
}

#[test]
fn test_printable_ascii_passes_through() {
    assert_eq!(escape_str("abc-XYZ.,:;09()", Context::Text), "abc-XYZ.,:;09()");
    assert_eq!(escape_str("abc-XYZ.,:;09()", Context::Data), "abc-XYZ.,:;09()");
}

#[test]
fn test_non_ascii_is_wrapped() {
    assert_eq!(escape('é', Context::Text), "\\wrp{é}");
    assert_eq!(escape('\u{00a0}', Context::Data), "\\wrp{\u{00a0}}");
    assert_eq!(escape_str("Mär", Context::Text), "M\\wrp{ä}r");
}

#[test]
fn test_control_characters_are_wrapped() {
    assert_eq!(escape('\t', Context::Text), "\\wrp{\t}");
}

#[test]
fn test_default_context_is_text() {
    assert_eq!(Context::default(), Context::Text);
}

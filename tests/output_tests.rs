use patfmt::output::{brace_list, escape_hash, group, to_tex_path, LocaleId};

#[test]
fn test_brace_list_escapes_names() {
    let months = ["janvier", "février", "mars"];
    assert_eq!(brace_list(months), "{janvier}{f\\wrp{é}vrier}{mars}");
}

#[test]
fn test_brace_list_owned_strings() {
    let days: Vec<String> = vec!["Mon".into(), "Tue day".into()];
    assert_eq!(brace_list(&days), "{Mon}{Tue\\spc day}");
    assert_eq!(brace_list(Vec::<String>::new()), "");
}

#[test]
fn test_paths() {
    assert_eq!(escape_hash("a#b#c"), "a\\#b\\#c");
    assert_eq!(to_tex_path("D:\\work\\x.tex", '\\'), "D:/work/x.tex");
    assert_eq!(group(&to_tex_path("/srv/x", '/'), true), "{/srv/x}");
}

#[test]
fn test_locale_identifier_parts() {
    assert_eq!(LocaleId::new("fr", "").identifier(true), "fr");
    assert_eq!(
        LocaleId::new("sr", "RS")
            .with_codeset("ISO-8859-5")
            .with_script("Cyrl")
            .identifier(true),
        "sr-RS.iso88595@Cyrl"
    );
    assert_eq!(LocaleId::default().identifier(false), "");
}

#[cfg(feature = "chrono")]
mod pdf {
    use chrono::{FixedOffset, TimeZone, Utc};
    use patfmt::output::pdf_date;

    #[test]
    fn test_pdf_date_with_offset() {
        let zone = FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("valid offset");
        let datetime = zone
            .with_ymd_and_hms(2024, 3, 7, 9, 5, 1)
            .single()
            .expect("unambiguous time");
        assert_eq!(pdf_date(&datetime), "D:20240307090501+05'30'");
    }

    #[test]
    fn test_pdf_date_west_of_utc() {
        let zone = FixedOffset::west_opt(8 * 3600).expect("valid offset");
        let datetime = zone
            .with_ymd_and_hms(1999, 12, 31, 23, 59, 59)
            .single()
            .expect("unambiguous time");
        assert_eq!(pdf_date(&datetime), "D:19991231235959-08'00'");
    }

    #[test]
    fn test_pdf_date_utc() {
        let datetime = Utc
            .with_ymd_and_hms(2020, 1, 2, 3, 4, 5)
            .single()
            .expect("unambiguous time");
        assert_eq!(pdf_date(&datetime), "D:20200102030405+00'00'");
    }
}

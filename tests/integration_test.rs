use rellipsis::{compute_fit, rebuild_prefix, scan, strip_tags, validate_markup};
use rellipsis::{Ellipsis, EllipsisError, EllipsisProps, FixedPitchHost, FixedPitchStyle, MarkupError, Phase};

const LONG_TEXT: &str = "Long text is clipped to a fixed number of rows and finished with an \
                         ellipsis and a link that expands it in place when clicked.";

const NESTED_HTML: &str = "<p>One <b>two <i>three</i></b><br>four <img src=\"x.png\"> five \
                           &amp; six</p><ul><li>seven <a href=\"#\">eight</a></li><li>nine</li></ul>";

fn host(columns: usize) -> FixedPitchHost {
    FixedPitchHost::new(FixedPitchStyle::columns(columns))
}

/// Polls until the scheduled pass has run.
fn settle(ellipsis: &mut Ellipsis, host: &mut FixedPitchHost) {
    ellipsis.poll(0.0, host);
    assert!(ellipsis.poll(1.0, host), "pass should run once the delay passed");
}

// ===== Example scenarios =====

#[test]
fn test_hello_world_is_cut_after_hello() {
    let mut host = host(10);
    let props = EllipsisProps::new("Hello world")
        .with_rows(1)
        .with_ellipsis_mark("…")
        .with_expand_label("more");
    let mut ellipsis = Ellipsis::new(props);
    settle(&mut ellipsis, &mut host);

    let display = ellipsis.display();
    assert!(display.is_truncated());
    assert!(display.shows_affordance());
    assert_eq!(display.visible_text(), "Hello");
    assert_eq!(ellipsis.action_label(), "more");
}

#[test]
fn test_short_content_is_untouched() {
    let mut host = host(40);
    let mut ellipsis = Ellipsis::new(EllipsisProps::new("A short note."));
    settle(&mut ellipsis, &mut host);

    let display = ellipsis.display();
    assert!(!display.is_truncated());
    assert!(!display.shows_affordance());
    assert_eq!(display.visible_text(), "A short note.");
}

#[test]
fn test_cut_inside_bold_closes_it() {
    let mut host = host(12);
    let props = EllipsisProps::html("<b>Bold text</b> and more")
        .with_rows(1)
        .with_ellipsis_mark("…")
        .with_expand_label("more");
    let outcome = compute_fit(&mut host, &props).unwrap();

    assert!(outcome.result.truncated);
    assert!(outcome.result.cut_index < "Bold text".len());
    assert!(outcome.text.ends_with("</b>"), "got {:?}", outcome.text);
    assert_eq!(validate_markup(&outcome.text), Ok(()));
}

#[test]
fn test_toggle_does_not_measure_again() {
    let mut host = host(20);
    let mut ellipsis = Ellipsis::new(EllipsisProps::new(LONG_TEXT).with_rows(2));
    settle(&mut ellipsis, &mut host);
    let truncated = ellipsis.display().visible_text().to_string();
    let mounts = host.mounts();

    ellipsis.toggle_expanded();
    assert_eq!(ellipsis.display().visible_text(), LONG_TEXT);
    assert_eq!(ellipsis.action_label(), "collapse");

    ellipsis.toggle_expanded();
    assert_eq!(ellipsis.display().visible_text(), truncated);
    assert_eq!(ellipsis.action_label(), "expand");

    assert!(!ellipsis.poll(5.0, &mut host));
    assert_eq!(host.mounts(), mounts);
}

// ===== Fit properties =====

#[test]
fn test_fit_is_idempotent() {
    let props = EllipsisProps::html(NESTED_HTML).with_rows(2);
    let first = compute_fit(&mut host(16), &props).unwrap();
    let second = compute_fit(&mut host(16), &props).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_more_rows_never_cut_earlier() {
    for props in [EllipsisProps::new(LONG_TEXT), EllipsisProps::html(NESTED_HTML)] {
        let mut previous = 0;
        for rows in 1..=8 {
            let outcome = compute_fit(&mut host(18), &props.clone().with_rows(rows)).unwrap();
            assert!(
                outcome.result.cut_index >= previous,
                "rows {rows}: cut {} after {previous}",
                outcome.result.cut_index
            );
            previous = outcome.result.cut_index;
        }
    }
}

#[test]
fn test_content_that_fits_is_returned_verbatim() {
    let plain = EllipsisProps::new(LONG_TEXT).with_rows(20);
    let outcome = compute_fit(&mut host(30), &plain).unwrap();
    assert!(!outcome.result.truncated);
    assert_eq!(outcome.text, LONG_TEXT);

    let html = EllipsisProps::html(NESTED_HTML).with_rows(20);
    let outcome = compute_fit(&mut host(30), &html).unwrap();
    assert!(!outcome.result.truncated);
    assert_eq!(outcome.text, NESTED_HTML);
    assert_eq!(outcome.result.cut_index, scan(NESTED_HTML).visible_len());
}

#[test]
fn test_every_cut_is_balanced() {
    let markup = scan(NESTED_HTML);
    for cut in 0..=markup.visible_len() {
        let fragment = rebuild_prefix(&markup, cut);
        assert_eq!(validate_markup(&fragment), Ok(()), "cut {cut}: {fragment}");
        assert!(!fragment.contains("</br>"), "cut {cut}: {fragment}");
        assert!(!fragment.contains("</img>"), "cut {cut}: {fragment}");
        assert_eq!(scan(&fragment).visible_len(), cut);
    }
}

#[test]
fn test_entities_are_never_split() {
    let markup = scan("a &amp; b &#x27;c&#39;");
    for cut in 0..=markup.visible_len() {
        let fragment = rebuild_prefix(&markup, cut);
        let amps = fragment.matches('&').count();
        let semis = fragment.matches(';').count();
        assert_eq!(amps, semis, "cut {cut}: {fragment}");
    }
}

#[test]
fn test_unmatched_closer_is_tolerated() {
    let props = EllipsisProps::html("plain</b> text <i>open and never closed").with_rows(1);
    let outcome = compute_fit(&mut host(30), &props).unwrap();
    assert!(outcome.result.truncated);
    // The stray closer is kept verbatim and the open italic gets closed.
    assert_eq!(outcome.text, "plain</b> text <i>open and n</i>");
}

#[test]
fn test_comment_with_multibyte_text_is_measured() {
    let props = EllipsisProps::html("<!-- é -->text").with_rows(1);
    let outcome = compute_fit(&mut host(20), &props).unwrap();
    assert!(!outcome.result.truncated);
    assert_eq!(outcome.text, "<!-- é -->text");

    let content = format!("<!-- 注释 --><b>{}</b>", "展开全文".repeat(10));
    let props = EllipsisProps::html(content)
        .with_rows(1)
        .with_ellipsis_mark("…")
        .with_expand_label("more");
    let outcome = compute_fit(&mut host(20), &props).unwrap();
    assert!(outcome.result.truncated);
    assert!(outcome.text.starts_with("<!-- 注释 --><b>"), "got {:?}", outcome.text);
    assert_eq!(validate_markup(&outcome.text), Ok(()));
}

// ===== Scheduling and probe lifecycle =====

#[test]
fn test_stale_pass_does_not_overwrite_newer_props() {
    let mut host = host(20);
    let mut ellipsis = Ellipsis::new(EllipsisProps::new(LONG_TEXT).with_rows(1));
    let stale = ellipsis.begin_recompute(0.0);
    let report = ellipsis.run_pass(stale, &mut host);

    ellipsis.set_props(EllipsisProps::new("Tiny."), 0.05);
    assert!(!ellipsis.commit(stale, report));
    assert!(matches!(ellipsis.phase(), Phase::Measuring { .. }));

    assert!(ellipsis.poll(1.0, &mut host));
    assert_eq!(ellipsis.display().visible_text(), "Tiny.");
    assert!(!ellipsis.display().is_truncated());
}

#[test]
fn test_probe_is_unmounted_after_every_pass() {
    let mut host = host(14);
    for rows in 1..=4 {
        compute_fit(&mut host, &EllipsisProps::html(NESTED_HTML).with_rows(rows)).unwrap();
        assert_eq!(host.mounted(), 0);
    }

    let mut narrow = FixedPitchHost::new(FixedPitchStyle { width: 0.0, ..FixedPitchStyle::columns(1) });
    let err = compute_fit(&mut narrow, &EllipsisProps::new(LONG_TEXT)).unwrap_err();
    assert_eq!(err, EllipsisError::ZeroWidth { width: 0.0 });
    assert_eq!(narrow.mounted(), 0);
}

#[test]
fn test_degraded_pass_shows_full_content() {
    let mut host = FixedPitchHost::detached();
    let mut ellipsis = Ellipsis::new(EllipsisProps::new(LONG_TEXT).with_rows(1));
    settle(&mut ellipsis, &mut host);
    assert_eq!(ellipsis.display().visible_text(), LONG_TEXT);
    assert!(!ellipsis.display().shows_affordance());
    assert!(matches!(ellipsis.last_outcome(), Some(Err(EllipsisError::ContainerUnavailable))));

    // Once the container is available a width change measures again.
    host.set_style(Some(FixedPitchStyle::columns(20)));
    assert!(ellipsis.set_container_width(160.0, 2.0));
    assert!(ellipsis.poll(3.0, &mut host));
    assert!(ellipsis.display().is_truncated());
}

// ===== Markup helpers =====

#[test]
fn test_strip_tags_and_validation() {
    assert_eq!(strip_tags("<p>Hi <b>there</b><br></p>"), "Hi there");
    assert_eq!(validate_markup("<p>ok<br></p>"), Ok(()));
    assert!(matches!(
        validate_markup("<p><b>x</p></b>"),
        Err(MarkupError::UnmatchedClose { .. })
    ));
    assert!(matches!(
        validate_markup("<div>open"),
        Err(MarkupError::Unclosed { .. })
    ));
}

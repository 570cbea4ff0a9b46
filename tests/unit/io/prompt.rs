//! Tests for the interactive level prompt

#[cfg(test)]
mod tests {
    use kochflake::SnowflakeError;
    use kochflake::algorithm::level::RecursionLevel;
    use kochflake::io::prompt::{OutputMode, RenderOutcome, Session};
    use std::io::Cursor;
    use std::path::PathBuf;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 7)
    }

    fn transcript(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    fn saved(level: RecursionLevel) -> RenderOutcome {
        RenderOutcome {
            path: PathBuf::from(format!("out/level_{level}.png")),
            display_error: None,
        }
    }

    // Tests menu answers map to output modes
    #[test]
    fn test_output_mode_from_choice() {
        assert_eq!(OutputMode::from_choice("0"), Some(OutputMode::FileOnly));
        assert_eq!(OutputMode::from_choice(" 1\n"), Some(OutputMode::FileAndDisplay));
        assert_eq!(OutputMode::from_choice("2"), None);
        assert_eq!(OutputMode::from_choice(""), None);

        assert!(!OutputMode::FileOnly.shows_image());
        assert!(OutputMode::FileAndDisplay.shows_image());
    }

    // Tests invalid menu answers are asked again
    #[test]
    fn test_choose_output_mode_retries() {
        let mut s = session("x\n5\n1\n");

        assert_eq!(s.choose_output_mode().unwrap(), Some(OutputMode::FileAndDisplay));
        let text = transcript(s);
        assert_eq!(text.matches("Please enter 0 or 1.").count(), 2);
        assert_eq!(text.matches("Choose output mode:").count(), 3);
    }

    // Tests end of input while choosing a mode
    #[test]
    fn test_choose_output_mode_eof() {
        let mut s = session("");

        assert_eq!(s.choose_output_mode().unwrap(), None);
    }

    // Tests invalid levels are explained and the prompt repeats
    #[test]
    fn test_next_level_rejects_invalid_input() {
        let mut s = session("abc\n-1\n9\n 4 \n");

        let level = s.next_level().unwrap().unwrap();
        assert_eq!(level.get(), 4);

        let text = transcript(s);
        assert!(text.contains("Level must be an integer"));
        assert!(text.contains("Level must not be negative. Please try again."));
        assert!(text.contains("Level must be between 0 and 7. Please try again."));
        assert_eq!(text.matches("integer from 0 to 7").count(), 4);
    }

    // Tests an empty line or end of input stops the prompt
    #[test]
    fn test_next_level_exit() {
        let mut s = session("\n");
        assert_eq!(s.next_level().unwrap(), None);

        let mut s = session("   \n3\n");
        assert_eq!(s.next_level().unwrap(), None);

        let mut s = session("");
        assert_eq!(s.next_level().unwrap(), None);
    }

    // Tests the full loop renders each accepted level with the chosen mode
    #[test]
    fn test_run_renders_levels() {
        let mut s = session("0\n2\nnope\n5\n\n");
        let mut seen = Vec::new();

        let rendered = s
            .run(|level, mode| {
                seen.push((level.get(), mode));
                Ok(saved(level))
            })
            .unwrap();

        assert_eq!(rendered, 2);
        assert_eq!(
            seen,
            vec![(2, OutputMode::FileOnly), (5, OutputMode::FileOnly)]
        );

        let text = transcript(s);
        assert!(text.contains("Generating Koch snowflake at level 2..."));
        assert!(text.contains("Saved to out/level_5.png"));
        assert!(text.ends_with("Exiting.\n"));
    }

    // Tests render failures are reported without ending the session
    #[test]
    fn test_run_continues_after_failure() {
        let mut s = session("1\n3\n4\n");

        let rendered = s
            .run(|level, _| {
                if level.get() == 3 {
                    Err(SnowflakeError::EmptyCurve)
                } else {
                    Ok(saved(level))
                }
            })
            .unwrap();

        assert_eq!(rendered, 1);
        let text = transcript(s);
        assert!(text.contains("Failed to render level 3: Curve has no segments to render"));
        assert!(text.contains("Saved to out/level_4.png"));
    }

    // Tests a display failure is reported alongside the saved path
    #[test]
    fn test_run_reports_display_failure() {
        let mut s = session("1\n0\n");

        let rendered = s
            .run(|level, mode| {
                assert!(mode.shows_image());
                let mut outcome = saved(level);
                outcome.display_error = Some(SnowflakeError::Display {
                    path: outcome.path.clone(),
                    source: std::io::Error::other("no viewer"),
                });
                Ok(outcome)
            })
            .unwrap();

        assert_eq!(rendered, 1);
        let text = transcript(s);
        assert!(text.contains("Saved to out/level_0.png"));
        assert!(text.contains("Cannot display 'out/level_0.png': no viewer (the file was still saved)"));
    }

    // Tests input ending before a mode is chosen renders nothing
    #[test]
    fn test_run_without_mode() {
        let mut s = session("");

        let rendered = s.run(|level, _| Ok(saved(level))).unwrap();

        assert_eq!(rendered, 0);
        assert!(!transcript(s).contains("Exiting."));
    }
}

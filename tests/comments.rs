use otter_cnf::{builder::Builder, constraints};

mod comments {
    use super::*;

    #[test]
    fn string_and_lines_agree() {
        let mut from_string = Builder::default();
        let mut from_lines = Builder::default();

        for builder in [&mut from_string, &mut from_lines] {
            let a = builder.fresh_or_max_variable("A");
            assert!(builder.add_clause_set(&constraints::or(&[a])).is_ok());
        }

        from_string.add_comment("line1\nline2");
        from_lines.add_comment(vec!["line1".to_string(), "line2".to_string()]);

        assert_eq!(from_string.build(), from_lines.build());
        assert_eq!(from_string.build(), "c line1\nc line2\np cnf 1 1\n1 0");
    }

    #[test]
    fn order_of_addition() {
        let mut builder = Builder::default();
        let a = builder.fresh_or_max_variable("A");

        builder.add_comment("first");
        assert!(builder.add_clause_set(&constraints::or(&[a])).is_ok());
        builder.add_comment(["second", "third"]);

        assert_eq!(builder.build(), "c first\nc second\nc third\np cnf 1 1\n1 0");
    }

    #[test]
    fn written_verbatim() {
        let mut builder = Builder::default();

        builder.add_comment("p cnf 9 9");
        builder.add_comment("");

        assert_eq!(builder.build(), "c p cnf 9 9\nc \np cnf 0 0");
    }
}

use otter_cnf::{builder::Builder, config::Config, constraints};

mod basic {
    use super::*;

    #[test]
    fn conjunction_of_units() {
        let mut builder = Builder::default();

        let [a, b, c] = *builder.fresh_or_max_variables(["A", "B", "C"]).as_slice() else {
            panic!("Insufficient variables");
        };

        assert!(builder.add_clause_set(&constraints::and(&[a, -b, c])).is_ok());

        assert_eq!(builder.build(), "p cnf 3 3\n1 0\n-2 0\n3 0");
    }

    #[test]
    fn exactly_one() {
        let mut builder = Builder::default();

        let [a, b, c] = *builder.fresh_or_max_variables(["A", "B", "C"]).as_slice() else {
            panic!("Insufficient variables");
        };

        assert!(builder.add_clause_set(&constraints::exactly_one(&[a, -b, c])).is_ok());

        assert_eq!(
            builder.build(),
            "p cnf 3 4\n-1 2 0\n-1 -3 0\n2 -3 0\n1 -2 3 0"
        );
    }

    #[test]
    fn unused_variables_are_compacted() {
        let mut builder = Builder::default();

        let [a, b, c, _d, _e] = *builder
            .fresh_or_max_variables(["A", "B", "C", "D", "E"])
            .as_slice()
        else {
            panic!("Insufficient variables");
        };

        assert!(builder.add_clause_set(&constraints::or(&[a, b])).is_ok());
        assert!(builder.add_clause_set(&constraints::implies(b, c)).is_ok());

        assert_eq!(builder.variable_count(), 5);
        assert_eq!(builder.build(), "p cnf 3 2\n1 2 0\n-2 3 0");
    }

    #[test]
    fn numbering_follows_first_use() {
        let mut builder = Builder::default();

        let [a, b, c] = *builder.fresh_or_max_variables(["A", "B", "C"]).as_slice() else {
            panic!("Insufficient variables");
        };

        assert!(builder.add_clause_set(&constraints::or(&[c, -a])).is_ok());
        assert!(builder.add_clause_set(&constraints::and(&[b, a])).is_ok());

        assert_eq!(builder.build(), "p cnf 3 3\n1 -2 0\n3 0\n2 0");
    }

    #[test]
    fn determinism() {
        let mut builder = Builder::default();

        let [a, b, c, d] = *builder.fresh_or_max_variables(["A", "B", "C", "D"]).as_slice() else {
            panic!("Insufficient variables");
        };

        builder.add_comment("determinism");
        assert!(builder.add_clause_set(&constraints::all_equal(&[d, b, a])).is_ok());
        assert!(builder.add_clause_set(&constraints::exactly_one(&[c, -d])).is_ok());

        let first = builder.build();
        let second = builder.build();
        assert_eq!(first, second);
    }

    #[test]
    fn build_then_add() {
        let mut builder = Builder::default();

        let [a, b] = *builder.fresh_or_max_variables(["A", "B"]).as_slice() else {
            panic!("Insufficient variables");
        };

        assert!(builder.add_clause_set(&constraints::or(&[b])).is_ok());
        assert_eq!(builder.build(), "p cnf 1 1\n1 0");

        assert!(builder.add_clause_set(&constraints::or(&[a, -b])).is_ok());
        assert_eq!(builder.build(), "p cnf 2 2\n1 0\n2 -1 0");
    }

    #[test]
    fn duplicate_sets_duplicate_clauses() {
        let mut builder = Builder::default();
        let a = builder.fresh_or_max_variable("A");

        let set = constraints::or(&[a]);
        assert!(builder.add_clause_set(&set).is_ok());
        assert!(builder.add_clause_set(&set).is_ok());

        assert_eq!(builder.build(), "p cnf 1 2\n1 0\n1 0");
    }

    #[test]
    fn negation_involution() {
        let mut plain = Builder::default();
        let a = plain.fresh_or_max_variable("A");
        assert!(plain.add_clause_set(&constraints::or(&[a])).is_ok());

        let mut twice = Builder::default();
        let a = twice.fresh_or_max_variable("A");
        assert!(twice.add_clause_set(&constraints::or(&[a.negate().negate()])).is_ok());

        assert_eq!(plain.build(), twice.build());
    }

    #[test]
    fn empty_clause() {
        let mut builder = Builder::default();

        assert!(builder.add_clause_set(&constraints::or(&[])).is_ok());

        assert_eq!(builder.build(), "p cnf 0 1\n0");
    }

    #[test]
    fn constants() {
        let mut builder = Builder::default();
        let a = builder.fresh_or_max_variable("A");

        assert!(builder.add_clause_set(&constraints::or(&[a])).is_ok());
        assert!(builder.add_clause_set(&constraints::always_true()).is_ok());
        assert!(builder.add_clause_set(&constraints::always_false()).is_ok());

        assert_eq!(
            builder.build(),
            "p cnf 3 5\n1 0\n-2 0\n3 0\n1 0\n2 0"
        );
    }

    #[test]
    fn sentinel_numbers_are_fixed() {
        let mut alone = Builder::default();
        assert!(alone.add_clause_set(&constraints::always_false()).is_ok());
        assert_eq!(alone.build(), "p cnf 2 3\n1 0\n-2 0\n2 0");

        let mut builder = Builder::default();
        let [a, b] = *builder.fresh_or_max_variables(["A", "B"]).as_slice() else {
            panic!("Insufficient variables");
        };

        assert!(builder.add_clause_set(&constraints::or(&[b, a])).is_ok());
        assert!(builder.add_clause_set(&constraints::always_false()).is_ok());
        assert!(builder.add_clause_set(&constraints::always_true()).is_ok());

        assert_eq!(
            builder.build(),
            "p cnf 4 5\n1 0\n-2 0\n3 4 0\n2 0\n1 0"
        );
    }

    #[test]
    fn sentinels_are_distinct() {
        assert_ne!(
            constraints::always_true().atoms().collect::<Vec<_>>(),
            constraints::always_false().atoms().collect::<Vec<_>>()
        );
    }

    #[test]
    fn independent_builders() {
        let mut first = Builder::default();
        let mut second = Builder::default();

        let p = first.fresh_or_max_variable("p");
        let q = second.fresh_or_max_variable("q");
        let r = second.fresh_or_max_variable("r");

        assert!(first.add_clause_set(&constraints::or(&[p])).is_ok());
        assert!(second.add_clause_set(&constraints::or(&[r, q])).is_ok());

        assert_eq!(first.build(), "p cnf 1 1\n1 0");
        assert_eq!(second.build(), "p cnf 2 1\n1 2 0");
    }
}

mod configured {
    use super::*;

    #[test]
    fn carriage_return_newline() {
        let mut config = Config::default();
        config.newline.set("\r\n".to_string());

        let mut builder = Builder::from_config(config);
        let [a, b] = *builder.fresh_or_max_variables(["A", "B"]).as_slice() else {
            panic!("Insufficient variables");
        };

        builder.add_comment("one\r\ntwo");
        assert!(builder.add_clause_set(&constraints::equals(a, b)).is_ok());

        assert_eq!(
            builder.build(),
            "c one\r\nc two\r\np cnf 2 2\r\n-1 2 0\r\n-2 1 0"
        );
    }

    #[test]
    fn variable_names() {
        let mut config = Config::default();
        config.variable_names.set(true);

        let mut builder = Builder::from_config(config);
        let [a, b, c] = *builder.fresh_or_max_variables(["A", "B", "C"]).as_slice() else {
            panic!("Insufficient variables");
        };

        assert!(builder.add_clause_set(&constraints::at_most_one(&[c, a])).is_ok());

        assert_eq!(builder.name_of(b.atom()), Some("B"));
        assert_eq!(builder.build(), "c 1 C\nc 2 A\np cnf 2 1\n-1 -2 0");
    }
}

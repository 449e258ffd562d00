    const AGES: [i64; 5] = [25, 30, 35, 28, 32];
    const SALARIES: [i64; 5] = [50000, 60000, 75000, 55000, 68000];

    fn close(left: Option<Measure>, right: Measure) {
        let left = left.expect("value expected");
        assert!((left - right).abs() < 1e-9 * right.abs().max(1.0), "left={} != right={}", left, right);
    }

    #[test]
    fn mean_of_ages() {
        close(MeanVar.mean(&AGES), 30.0);
    }

    #[test]
    fn mean_of_salaries() {
        close(MeanVar.mean(&SALARIES), 61600.0);
    }

    #[test]
    fn mean_of_department_pairs() {
        close(MeanVar.mean(&[50000, 75000]), 62500.0);
        close(MeanVar.mean(&[60000, 68000]), 64000.0);
        close(MeanVar.mean(&[55000]), 55000.0);
    }

    #[test]
    fn variance_of_ages() {
        close(MeanVar.variance(&AGES), 14.5);
        close(MeanVar.std_dev(&AGES), 14.5f64.sqrt());
    }

    #[test]
    fn variance_of_salaries() {
        close(MeanVar.variance(&SALARIES), 100_300_000.0);
    }

    #[test]
    fn variance_of_constant() {
        close(MeanVar.variance(&[7, 7, 7]), 0.0);
    }

    #[test]
    fn undefined_on_short_input() {
        assert_eq!(MeanVar.mean(&[]), None);
        assert_eq!(MeanVar.variance(&[]), None);
        assert_eq!(MeanVar.variance(&[1]), None);
        assert_eq!(MeanVar.std_dev(&[1]), None);
    }

    #[test]
    fn negative_values() {
        close(MeanVar.mean(&[-3, 3, -6, 6]), 0.0);
        close(MeanVar.variance(&[-1, 1]), 2.0);
    }

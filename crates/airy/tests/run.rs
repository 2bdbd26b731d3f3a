use approx::{assert_abs_diff_eq, assert_relative_eq};
use oscstep_airy::{MethodName, RunConfig, RunError, run, special};
use oscstep_solvers::transient::driver::Status;

fn output_lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .expect("output is utf-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Parses `At t = <t>, y = [<u1>, <u2>]`.
fn parse_line(line: &str) -> (f64, f64, f64) {
    let rest = line.strip_prefix("At t = ").expect("line prefix");
    let (t, rest) = rest.split_once(", y = [").expect("state separator");
    let state = rest.strip_suffix(']').expect("closing bracket");
    let (u1, u2) = state.split_once(", ").expect("two components");
    (
        t.parse().expect("time"),
        u1.parse().expect("u1"),
        u2.parse().expect("u2"),
    )
}

#[test]
fn default_run_reports_every_increment() {
    let mut out = Vec::new();
    let solution = run(&RunConfig::default(), &mut out).expect("run succeeds");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 200);
    assert_eq!(solution.history.len(), 200);

    let lines = output_lines(out);
    assert_eq!(lines.len(), 200);

    let records: Vec<_> = lines.iter().map(|line| parse_line(line)).collect();
    assert!(records.windows(2).all(|w| w[1].0 > w[0].0));

    let (t_first, _, _) = records[0];
    let (t_last, u1, u2) = records[199];
    assert_relative_eq!(t_first, 0.01, max_relative = 1e-12);
    assert!(t_last >= 2.0);

    // The exact solution is Ai(t).
    assert_abs_diff_eq!(u1, special::airy_ai(t_last), epsilon = 1e-6);
    assert_abs_diff_eq!(u2, special::airy_ai_prime(t_last), epsilon = 1e-6);
}

#[test]
fn records_match_printed_lines() {
    let mut out = Vec::new();
    let config = RunConfig {
        tf: 0.5,
        dt: 0.1,
        ..RunConfig::default()
    };
    let solution = run(&config, &mut out).unwrap();

    let lines = output_lines(out);
    assert_eq!(lines.len(), solution.history.len());

    for (line, record) in lines.iter().zip(&solution.history) {
        let (t, u1, u2) = parse_line(line);
        assert_eq!(t, record.time);
        assert_eq!([u1, u2], record.state);
    }
}

#[test]
fn solution_tracks_ai_along_the_way() {
    for method in [MethodName::Dopri5, MethodName::Dop853] {
        let config = RunConfig {
            t0: -1.0,
            tf: 1.0,
            dt: 0.05,
            rtol: 1e-9,
            atol: 1e-11,
            method,
            ..RunConfig::default()
        };
        let solution = run(&config, std::io::sink()).unwrap();

        assert_eq!(solution.steps, 40);
        for record in &solution.history {
            assert_abs_diff_eq!(record.state[0], special::airy_ai(record.time), epsilon = 1e-8);
            assert_abs_diff_eq!(
                record.state[1],
                special::airy_ai_prime(record.time),
                epsilon = 1e-8
            );
        }
    }
}

#[test]
fn last_report_may_pass_final_time() {
    let config = RunConfig {
        tf: 1.0,
        dt: 0.3,
        ..RunConfig::default()
    };
    let solution = run(&config, std::io::sink()).unwrap();

    assert_eq!(solution.steps, 4);
    let last = solution.last().unwrap();
    assert_relative_eq!(last.time, 1.2, max_relative = 1e-12);
}

#[test]
fn fixed_precision_output() {
    let mut out = Vec::new();
    let config = RunConfig {
        tf: 0.01,
        precision: Some(6),
        ..RunConfig::default()
    };
    run(&config, &mut out).unwrap();

    let lines = output_lines(out);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("At t = 0.010000, y = [0.352"));
}

#[test]
fn invalid_config_is_rejected_before_integrating() {
    let mut out = Vec::new();
    let config = RunConfig {
        dt: 0.0,
        ..RunConfig::default()
    };

    let err = run(&config, &mut out).unwrap_err();

    assert!(matches!(err, RunError::Config(_)));
    assert_eq!(err.time(), None);
    assert!(out.is_empty());
}

/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .display()
        .to_string()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - report rendered
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("vulngraph")
            .args(["-q", "github.com/pallets/flask", "-r", &fixture("flask-report.json")])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("vulngraph").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("vulngraph").arg("--version").assert().code(0);
    }

    /// Exit code 1: the server has no report for the query
    #[test]
    fn test_exit_code_report_not_found() {
        cargo_bin_cmd!("vulngraph")
            .args(["-q", "github.com/nobody/nothing", "-r", &fixture("not-found.json")])
            .assert()
            .code(1);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("vulngraph")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: neither --query nor --url
    #[test]
    fn test_exit_code_missing_query() {
        cargo_bin_cmd!("vulngraph").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("vulngraph")
            .args(["-q", "flask", "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - report file does not exist
    #[test]
    fn test_exit_code_missing_report_file() {
        cargo_bin_cmd!("vulngraph")
            .args(["-q", "flask", "-r", "/nonexistent/report.json"])
            .assert()
            .code(3);
    }

    /// Exit code 3: Application error - report is not JSON
    #[test]
    fn test_exit_code_malformed_report() {
        cargo_bin_cmd!("vulngraph")
            .args(["-q", "flask", "-r", &fixture("malformed.json")])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse graph report"));
    }

    /// Exit code 3: Application error - server unreachable
    #[test]
    fn test_exit_code_unreachable_server() {
        cargo_bin_cmd!("vulngraph")
            .args(["-q", "flask", "-s", "http://127.0.0.1:9"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to fetch graph report for 'flask'"));
    }

    /// Exit code 3: Application error - server URL is not http(s)
    #[test]
    fn test_exit_code_invalid_server_url() {
        cargo_bin_cmd!("vulngraph")
            .args(["-q", "flask", "-s", "ftp://insights"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid server URL"));
    }

    /// Exit code 3: Application error - page URL is not absolute
    #[test]
    fn test_exit_code_invalid_page_url() {
        cargo_bin_cmd!("vulngraph")
            .args(["-u", "/graph?query=flask", "-r", &fixture("flask-report.json")])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid page URL"));
    }
}

mod html_output_tests {
    use super::*;

    #[test]
    fn test_html_page_on_stdout() {
        cargo_bin_cmd!("vulngraph")
            .args(["-q", "github.com/pallets/flask", "-r", &fixture("flask-report.json")])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("<div id=\"graph\"></div>"))
            .stdout(predicate::str::contains("<h1>Graph for github.com/pallets/flask</h1>"))
            .stdout(predicate::str::contains("This graph has been pruned"))
            .stdout(predicate::str::contains(
                "https://nvd.nist.gov/vuln/detail/CVE-2019-10906",
            ))
            .stderr(predicate::str::contains(
                "Found 2 vulnerabilities: CVE-2019-14806, CVE-2019-10906",
            ));
    }

    #[test]
    fn test_redirect_page_for_missing_report() {
        cargo_bin_cmd!("vulngraph")
            .args(["-q", "github.com/nobody/nothing", "-r", &fixture("not-found.json")])
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "window.location.href = \"/?query=github.com%2Fnobody%2Fnothing\";",
            ))
            .stdout(predicate::str::contains("vis.Network").not());
    }

    #[test]
    fn test_output_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("graph.html");

        cargo_bin_cmd!("vulngraph")
            .args([
                "-q",
                "github.com/pallets/flask",
                "-r",
                &fixture("flask-report.json"),
                "-o",
                &output.display().to_string(),
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("Output complete"));

        let page = std::fs::read_to_string(output).unwrap();
        assert!(page.contains("new vis.Network("));
    }
}

mod json_output_tests {
    use super::*;
    use serde_json::Value;

    fn run_json(args: &[&str]) -> Value {
        let output = cargo_bin_cmd!("vulngraph")
            .args(args)
            .args(["-f", "json"])
            .output()
            .unwrap();
        serde_json::from_slice(&output.stdout).unwrap()
    }

    #[test]
    fn test_pruned_json() {
        let value = run_json(&["-q", "github.com/pallets/flask", "-r", &fixture("flask-report.json")]);

        assert_eq!(value["pruned"], true);
        let ids: Vec<&str> = value["nodes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["id"].as_str().unwrap())
            .collect();
        assert!(!ids.contains(&"click"));
        assert_eq!(ids.len(), 6);
        assert_eq!(value["summary"]["vulnerabilities"][0]["tier"], "high");
        assert_eq!(value["summary"]["vulnerabilities"][1]["tier"], "critical");
    }

    #[test]
    fn test_skip_prune_json() {
        let value = run_json(&[
            "-q",
            "github.com/pallets/flask",
            "--skip-prune",
            "-r",
            &fixture("flask-report.json"),
        ]);

        assert_eq!(value["pruned"], false);
        assert_eq!(value["nodes"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_page_url_json() {
        let value = run_json(&[
            "-u",
            "http://localhost:5000/graph?query=github.com%2Fpallets%2Fflask&skip_prune=1",
            "-r",
            &fixture("flask-report.json"),
        ]);

        assert_eq!(value["query"], "github.com/pallets/flask");
        assert_eq!(value["pruned"], false);
    }

    #[test]
    fn test_bare_report_json() {
        let value = run_json(&["-q", "github.com/psf/requests", "-r", &fixture("bare-report.json")]);

        assert_eq!(value["edges"][0]["title"],
            "github.com/psf/requests &rarr; idna<br><br><span class=\"version\">Version constraint:<br>&lt; 4<br>&gt;= 2.5</span>");
        assert_eq!(value["summary"]["headline"], "No vulnerabilities found!");
    }

    #[test]
    fn test_redirect_json() {
        let value = run_json(&["-q", "nothing", "-r", &fixture("not-found.json")]);
        assert_eq!(value["redirect"], "/?query=nothing");
    }
}

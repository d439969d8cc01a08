use std::{
    fs,
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

fn tinyvm(args: &[&Path], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tinyvm"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start tinyvm");
    // the process may exit before reading everything, a broken pipe is fine here
    let _ = child.stdin.take().expect("stdin is piped").write_all(input);
    child.wait_with_output().expect("failed to wait for tinyvm")
}

fn run_bytes(code: &[u8], input: &[u8]) -> Output {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let path = tmp.path().join("prog.tbc");
    fs::write(&path, code).expect("failed to write bytecode");
    tinyvm(&[Path::new("run"), &path], input)
}

#[test]
fn assemble_then_run() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let source = tmp.path().join("add.src");
    let output = tmp.path().join("add.tbc");
    fs::write(&source, b"# Soma dois n\xfameros\nREAD\nREAD\nADD\nPRINT\nHALT\n").unwrap();

    let assembled = tinyvm(&[Path::new("assemble"), &source, &output], b"");
    assert_eq!(assembled.status.code(), Some(0));
    assert_eq!(fs::read(&output).unwrap(), vec![0x01, 0x01, 0x03, 0x02, 0xFF]);

    let ran = tinyvm(&[Path::new("run"), &output], b"\x05\n\x07\n");
    assert_eq!(ran.status.code(), Some(0));
    assert_eq!(ran.stdout, vec![0x0C]);
}

#[test]
fn failed_assembly_writes_nothing() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let source = tmp.path().join("bad.src");
    let output = tmp.path().join("bad.tbc");
    fs::write(&source, "READ\nPUSH 1\n").unwrap();

    let assembled = tinyvm(&[Path::new("assemble"), &source, &output], b"");
    assert_eq!(assembled.status.code(), Some(1));
    assert!(!output.exists(), "output file was written on failure");
    let stderr = String::from_utf8_lossy(&assembled.stderr);
    assert!(stderr.contains("line 2"), "stderr was: {}", stderr);
}

#[test]
fn run_exit_statuses() {
    let empty = run_bytes(&[], b"");
    assert_eq!(empty.status.code(), Some(0));
    assert!(empty.stdout.is_empty());

    let underflow = run_bytes(&[0x02], b"");
    assert_eq!(underflow.status.code(), Some(2));
    assert!(underflow.stdout.is_empty());
    assert!(String::from_utf8_lossy(&underflow.stderr).contains("stack underflow in PRINT"));

    let unknown = run_bytes(&[0x42], b"");
    assert_eq!(unknown.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&unknown.stderr).contains("0x42"));
}

#[test]
fn missing_files_exit_with_one() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let missing = tmp.path().join("missing.tbc");
    let ran = tinyvm(&[Path::new("run"), &missing], b"");
    assert_eq!(ran.status.code(), Some(1));
}

#[test]
fn usage_errors_exit_with_one() {
    assert_eq!(tinyvm(&[], b"").status.code(), Some(1));
    assert_eq!(tinyvm(&[Path::new("run")], b"").status.code(), Some(1));
    assert_eq!(tinyvm(&[Path::new("bogus")], b"").status.code(), Some(1));
}

#[test]
fn help_exits_cleanly() {
    let help = tinyvm(&[Path::new("--help")], b"");
    assert_eq!(help.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&help.stdout).to_lowercase().contains("usage"));
}

#[test]
fn faults_report_their_offset() {
    let ran = run_bytes(&[0x01, 0x02, 0x02], b"a\n");
    assert_eq!(ran.status.code(), Some(2));
    assert_eq!(ran.stdout, b"a".to_vec());
    assert!(String::from_utf8_lossy(&ran.stderr).contains("(at 0002)"));
}

#[test]
fn verbose_only_reports_finished_runs() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let path = tmp.path().join("prog.tbc");

    fs::write(&path, [0x02]).unwrap();
    let faulted = tinyvm(&[Path::new("-v"), Path::new("run"), &path], b"");
    let stderr = String::from_utf8_lossy(&faulted.stderr);
    assert_eq!(faulted.status.code(), Some(2));
    assert!(stderr.contains("Starting bytecode-interpreter"), "stderr was: {}", stderr);
    assert!(!stderr.contains("Finished bytecode-interpreter"), "stderr was: {}", stderr);

    fs::write(&path, [0xFF]).unwrap();
    let halted = tinyvm(&[Path::new("-v"), Path::new("run"), &path], b"");
    assert_eq!(halted.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&halted.stderr).contains("Finished bytecode-interpreter"));
}

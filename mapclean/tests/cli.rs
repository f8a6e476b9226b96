use assert_cmd::Command;
use mapclean::{pgm, CellState, Grid};
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("mapclean").unwrap()
}

fn write_raster(path: &std::path::Path, width: usize, height: usize, pixels: &[u8]) {
    let mut bytes = format!("P5\n# test map\n{} {}\n255\n", width, height).into_bytes();
    bytes.extend_from_slice(pixels);
    std::fs::write(path, bytes).unwrap();
}

#[test]
fn missing_argument() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(contains("Usage"));

    assert!(!dir.path().join("map_out.pgm").exists());
}

#[test]
fn process_map() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("map.pgm");

    write_raster(
        &input,
        3,
        3,
        &[205, 205, 205, 205, 254, 205, 205, 205, 205],
    );

    cmd()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("Output saved to map_out.pgm"));

    let output = pgm::load(dir.path().join("map_out.pgm")).unwrap();
    assert_eq!(output, "?#?\n#.#\n?#?".parse::<Grid>().unwrap());
}

#[test]
fn grows_cropped_map() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cropped.pgm");

    write_raster(&input, 3, 2, &[0, 254, 0, 0, 0, 0]);

    cmd().current_dir(dir.path()).arg(&input).assert().success();

    let output = pgm::load(dir.path().join("map_out.pgm")).unwrap();
    assert_eq!(output.rows(), 3);
    assert_eq!(output.cols(), 3);
    assert_eq!(output.count(CellState::Outdoor), 0);
    assert_eq!(output, "?#?\n#.#\n###".parse::<Grid>().unwrap());
}

#[test]
fn malformed_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.pgm");
    std::fs::write(&input, b"P6\n1 1\n255\n\x00\x00\x00").unwrap();

    cmd()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("malformed input"));

    assert!(!dir.path().join("map_out.pgm").exists());
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .current_dir(dir.path())
        .arg(dir.path().join("nope.pgm"))
        .assert()
        .failure()
        .stderr(contains("failed to load"));
}

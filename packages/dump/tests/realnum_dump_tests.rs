use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn calc_divides() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("realnum-dump")?;

    cmd.args(["calc", "31415926535", "/", "10000000000"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("3.1415926535\n"));

    Ok(())
}

#[test]
fn calc_accepts_negative_operands() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("realnum-dump")?;

    cmd.args(["calc", "-1.5", "x", "-2"]);
    cmd.assert().success().stdout(predicate::eq("3.\n"));

    Ok(())
}

#[test]
fn calc_reports_divide_by_zero() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("realnum-dump")?;

    cmd.args(["calc", "1", "/", "0"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cannot divide by zero"));

    Ok(())
}

#[test]
fn calc_rejects_unknown_operator() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("realnum-dump")?;

    cmd.args(["calc", "1", "%", "2"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operator '%'"));

    Ok(())
}

#[test]
fn pack_uint256_hex_literal() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("realnum-dump")?;

    cmd.args(["pack", "--bits", "256", "0x1234567890ABCDEF0123456789ABCDF"]);
    cmd.assert().success().stdout(predicate::eq(
        "dfbc9a78563412f0debc0a896745230100000000000000000000000000000000\n",
    ));

    Ok(())
}

#[test]
fn pack_signed_value() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("realnum-dump")?;

    cmd.args(["pack", "--bits", "64", "--signed", "-300"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("d4feffffffffffff\n"));

    Ok(())
}

#[test]
fn pack_verbose_prints_size() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("realnum-dump")?;

    cmd.args(["--verbose", "pack", "--bits", "64", "1"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("0100000000000000\n"))
        .stderr(predicate::str::contains("Pack size: 8 bytes"));

    Ok(())
}

#[test]
fn pack_rejects_out_of_range() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("realnum-dump")?;

    cmd.args(["pack", "--bits", "8", "256"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("256 does not fit into Uint8"));

    Ok(())
}

#[test]
fn pack_rejects_unsupported_width() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("realnum-dump")?;

    cmd.args(["pack", "--bits", "12", "1"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported bit width 12"));

    Ok(())
}

#[test]
fn unpack_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("realnum-dump")?;

    cmd.args(["unpack", "--bits", "64", "--signed", "0xd4feffffffffffff"]);
    cmd.assert().success().stdout(predicate::eq("-300\n"));

    Ok(())
}

#[test]
fn unpack_reports_length_mismatch() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("realnum-dump")?;

    cmd.args(["unpack", "--bits", "64", "0102"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Length mismatch: expected=8 actual=2",
        ));

    Ok(())
}

#[test]
fn dump_continues_past_failures() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("realnum-dump")?;

    cmd.args(["dump", "12345.6789", "1/0", "10/4", "1.2.3", "-0.50"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("12345.6789 = 12345.6789\n"))
        .stdout(predicate::str::contains(
            "1/0 = <unprintable: Divide by zero: Cannot divide by zero>\n",
        ))
        .stdout(predicate::str::contains("10/4 = 2.5\n"))
        .stdout(predicate::str::contains(
            "1.2.3 = <unprintable: Invalid format: Parsing Decimal128: unexpected character '.'>\n",
        ))
        .stdout(predicate::str::contains("-0.50 = -0.5\n"));

    Ok(())
}

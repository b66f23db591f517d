#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::data::{TripTable, load_table};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Six Chicago-style trips (hand-checked):
/// - months: June x3, January x2, May x1
/// - Friday x3 (all at 15h), Monday, Wednesday, Tuesday
/// - durations sum to 96600 s (1 day, 2:50:00), mean 16100
/// - Wood St & Hubbard St -> Damen Ave & Chicago Ave twice
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-06-23 15:09:32,2017-06-23 15:14:32,300,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
1,2017-06-23 15:30:00,2017-06-23 15:40:00,600,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Female,1985.0
2,2017-06-26 09:01:20,2017-06-26 09:16:20,900,Canal St & Adams St,Wood St & Hubbard St,Customer,,
3,2017-05-26 15:41:44,2017-05-26 16:01:44,1200,Wood St & Hubbard St,Canal St & Adams St,Subscriber,Male,1992.0
4,2017-01-04 08:27:49,2017-01-04 09:27:49,3600,Damen Ave & Chicago Ave,Damen Ave & Chicago Ave,Customer,,1970.0
5,2017-01-17 08:53:07,2017-01-18 09:53:07,90000,Canal St & Adams St,Damen Ave & Chicago Ave,Subscriber,Female,2001.0
";

/// Washington has no Gender / Birth Year columns.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
1,2017-03-11 10:40:00,2017-03-11 10:46:42,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
2,2017-05-30 01:02:59,2017-05-30 01:13:36,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Customer
";

pub fn bks(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("bikeshare");
    // keep any real ~/.bikeshare out of the way
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Create an empty per-test directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("bikeshare_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Test dir holding chicago.csv and washington.csv (no New York file)
pub fn setup_data_dir(name: &str) -> PathBuf {
    let dir = setup_test_dir(name);
    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago.csv");
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).expect("write washington.csv");
    dir
}

pub fn chicago_table() -> TripTable {
    load_table(CHICAGO_CSV.as_bytes(), "chicago fixture").expect("load chicago fixture")
}

pub fn washington_table() -> TripTable {
    load_table(WASHINGTON_CSV.as_bytes(), "washington fixture").expect("load washington fixture")
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Subscriber,Male,1981.0
304487,2017-03-06 13:49:38,2017-03-06 13:55:28,350,Christiana Ave & Lawrence Ave,St. Louis Ave & Balmoral Ave,Subscriber,Male,1986.0
45207,2017-01-17 14:53:07,2017-01-17 15:02:01,534,Clark St & Randolph St,Desplaines St & Jackson Blvd,Customer,,
1473887,2017-06-26 09:01:20,2017-06-26 09:11:06,586,Theater on the Lake,Wood St & Taylor St,Subscriber,Male,1992.0
961916,2017-05-26 09:41:44,2017-05-26 09:46:25,281,Theater on the Lake,Wood St & Taylor St,Subscriber,Female,1983.0
";

pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
1330037,2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th & Rhode Island Ave NW,17th & Rhode Island Ave NW,Customer
";

pub const NYC_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
5688089,2017-06-11 14:55:05,2017-06-11 15:08:21,795,Suffolk St & Stanton St,W Broadway & Spring St,Subscriber,Male,1998.0
4096714,2017-05-11 15:30:11,2017-05-11 15:41:43,692,Lexington Ave & E 63 St,1 Ave & E 78 St,Subscriber,Male,1981.0
";

pub fn bikeshare() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Unique scratch directory inside the system temp dir, emptied first.
pub fn scratch_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("bikeshare_it_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create scratch dir");
    path
}

/// Scratch dir holding the three city files; also used as HOME so no real
/// configuration file is picked up.
pub fn data_dir_with_cities(name: &str) -> PathBuf {
    let dir = scratch_dir(name);
    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago");
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).expect("write washington");
    fs::write(dir.join("new_york_city.csv"), NYC_CSV).expect("write nyc");
    dir
}

/// `bikeshare --data-dir <dir>` with HOME pointed at the same directory.
pub fn bikeshare_in(dir: &PathBuf) -> Command {
    let data_dir = dir.to_string_lossy().to_string();
    let mut cmd = bikeshare();
    cmd.env("HOME", dir)
        .env_remove("BIKESHARE_LOG")
        .args(["--data-dir", data_dir.as_str()]);
    cmd
}

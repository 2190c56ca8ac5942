//! A shell-script stand-in for `flyctl`.
//!
//! Every invocation appends its arguments to `$FAKE_FLY_LOG`; `secrets import`
//! also appends its stdin to `$FAKE_FLY_LOG.stdin`. Exit codes are chosen with
//! environment variables:
//!
//! | variable               | command                        | default |
//! |------------------------|--------------------------------|---------|
//! | `FAKE_FLY_WHOAMI`      | `auth whoami`                  | 0       |
//! | `FAKE_FLY_LOGIN`       | `auth login`                   | 0       |
//! | `FAKE_FLY_STATUS`      | first `status` (app lookup)    | 0       |
//! | `FAKE_FLY_FINAL_STATUS`| later `status` calls           | 0       |
//! | `FAKE_FLY_LAUNCH`      | `launch`                       | 0       |
//! | `FAKE_FLY_SECRETS`     | `secrets import`               | 0       |
//! | `FAKE_FLY_DEPLOY`      | `deploy`                       | 0       |
//! | `FAKE_FLY_DEBUG`       | `logs`, `ssh`                  | 0       |

use std::fs;
use std::path::Path;

pub const FAKE_FLYCTL: &str = r#"#!/bin/sh
log="${FAKE_FLY_LOG:?}"
echo "$*" >> "$log"

case "$1 $2" in
  "auth whoami")
    echo "ops@example.com"
    exit "${FAKE_FLY_WHOAMI:-0}" ;;
  "auth login")
    exit "${FAKE_FLY_LOGIN:-0}" ;;
  "secrets import")
    cat >> "$log.stdin"
    exit "${FAKE_FLY_SECRETS:-0}" ;;
esac

case "$1" in
  status)
    if [ -e "$log.probed" ]; then
      echo "Machines: 1 started"
      exit "${FAKE_FLY_FINAL_STATUS:-0}"
    fi
    : > "$log.probed"
    exit "${FAKE_FLY_STATUS:-0}" ;;
  launch) exit "${FAKE_FLY_LAUNCH:-0}" ;;
  deploy)
    echo "Deploying fake app"
    exit "${FAKE_FLY_DEPLOY:-0}" ;;
  logs|ssh) exit "${FAKE_FLY_DEBUG:-0}" ;;
esac
exit 0
"#;

/// Write the fake CLI as an executable named `name` inside `dir`.
#[cfg(unix)]
pub fn install_fake_cli(dir: &Path, name: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, FAKE_FLYCTL).expect("Failed to write fake CLI");
    let mut perms = fs::metadata(&path).expect("fake CLI metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to chmod fake CLI");
}

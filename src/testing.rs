//! # 测试辅助
//!
//! 生成充当转换器的 shell 脚本。
//!
//! 并行测试中一边写脚本一边 fork 子进程会触发 `ETXTBSY`，
//! 所以写脚本和启动子进程的测试都要持有 `process_lock()`。

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

static PROCESS_LOCK: Mutex<()> = Mutex::new(());

/// 串行化启动子进程的测试
pub fn process_lock() -> MutexGuard<'static, ()> {
    PROCESS_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// 写入可执行的 `/bin/sh` 脚本
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// 记录每次调用参数（每行一次）并以给定状态退出的转换器
#[cfg(unix)]
pub fn recording_converter(dir: &Path, log: &Path, exit_code: i32) -> PathBuf {
    write_script(
        dir,
        "converter.sh",
        &format!("echo \"$@\" >> '{}'\nexit {}", log.display(), exit_code),
    )
}

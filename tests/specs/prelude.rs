//! Shared helpers for specs: a fake device socket and a CLI runner.

use assert_cmd::Command;
use rosc::{OscMessage, OscPacket};
use std::collections::HashMap;
use std::net::{SocketAddr, UdpSocket};
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tempfile::TempDir;

pub use rosc::OscType;

/// A loopback socket standing in for AbletonOSC's listen port.
pub struct Device {
    socket: UdpSocket,
}

impl Device {
    pub fn bind() -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        socket.set_read_timeout(Some(Duration::from_millis(200))).unwrap();
        Self { socket }
    }

    pub fn port(&self) -> u16 {
        self.socket.local_addr().unwrap().port()
    }

    /// Drain the datagrams already queued on the socket.
    pub fn received(&self) -> Vec<OscMessage> {
        let mut out = Vec::new();
        let mut buf = [0u8; 4096];
        while let Ok((len, _)) = self.socket.recv_from(&mut buf) {
            match rosc::decoder::decode_udp(&buf[..len]).unwrap().1 {
                OscPacket::Message(msg) => out.push(msg),
                OscPacket::Bundle(_) => panic!("unexpected bundle"),
            }
        }
        out
    }

    /// Answer queries from a background thread until `lifetime` elapses.
    /// Each message whose address is in `answers` gets a reply with the same
    /// address sent back to its source.
    pub fn answer(
        self,
        answers: HashMap<&'static str, Vec<OscType>>,
        lifetime: Duration,
    ) -> JoinHandle<Vec<String>> {
        std::thread::spawn(move || {
            let deadline = Instant::now() + lifetime;
            let mut seen = Vec::new();
            let mut buf = [0u8; 4096];
            while Instant::now() < deadline {
                let Ok((len, from)) = self.socket.recv_from(&mut buf) else {
                    continue;
                };
                let OscPacket::Message(msg) = rosc::decoder::decode_udp(&buf[..len]).unwrap().1
                else {
                    continue;
                };
                seen.push(msg.addr.clone());
                if let Some(args) = answers.get(msg.addr.as_str()) {
                    reply(&self.socket, from, &msg.addr, args.clone());
                }
            }
            seen
        })
    }
}

fn reply(socket: &UdpSocket, to: SocketAddr, addr: &str, args: Vec<OscType>) {
    let packet = OscPacket::Message(OscMessage { addr: addr.to_string(), args });
    socket.send_to(&rosc::encoder::encode(&packet).unwrap(), to).unwrap();
}

/// A port nothing is listening on right now.
pub fn free_port() -> u16 {
    UdpSocket::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port()
}

/// The workspace's `ob` binary, next to this test's `deps/` directory.
///
/// `CARGO_BIN_EXE_ob` is only set for tests of the package that owns the
/// binary, so the path is derived from the running test executable.
pub fn ob_binary() -> PathBuf {
    let exe = std::env::current_exe().unwrap();
    let profile_dir = exe.parent().and_then(Path::parent).unwrap();
    let bin = profile_dir.join(format!("ob{}", std::env::consts::EXE_SUFFIX));
    assert!(bin.exists(), "ob binary not built at {}", bin.display());
    bin
}

/// Isolated environment for one spec run.
pub struct Env {
    dir: TempDir,
}

impl Env {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file under the temp dir, returning its path as a string.
    pub fn file(&self, name: &str, contents: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path.display().to_string()
    }

    /// `ob` with config and logging isolated from the host.
    pub fn ob(&self) -> CliBuilder {
        let mut cmd = Command::new(ob_binary());
        cmd.env_clear()
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env("OB_PACING_MS", "0")
            .env("OB_REPLY_TIMEOUT_MS", "300");
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Point at `port` on loopback.
    pub fn device(self, port: u16) -> Self {
        self.env("OB_OSC_HOST", "127.0.0.1").env("OB_OSC_PORT", port.to_string())
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    pub fn fails(self) -> RunAssert {
        self.exits(1)
    }

    pub fn exits(mut self, code: i32) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit code\nstdout:\n{stdout}\nstderr:\n{stderr}"
        );
        RunAssert { stdout, stderr }
    }
}

pub struct RunAssert {
    pub stdout: String,
    pub stderr: String,
}

impl RunAssert {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

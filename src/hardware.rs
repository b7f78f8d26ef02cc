//! Host description logged at the start of a run, so result lines can be
//! matched to the machine that produced them.

use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwareInfo {
    pub cpu: String,
    pub cores: usize,
    pub ram_gb: u64,
    pub os: String,
    pub arch: String,
}

pub fn capture_hardware() -> HardwareInfo {
    HardwareInfo {
        cpu: read_cpu_model(),
        cores: std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(0),
        ram_gb: read_total_ram_gb(),
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
    }
}

pub fn log_hardware_info() {
    let hw = capture_hardware();
    info!(
        cpu = %hw.cpu,
        cores = hw.cores,
        ram_gb = hw.ram_gb,
        os = %hw.os,
        arch = %hw.arch,
        "hardware"
    );
}

/// CPU model from `/proc/cpuinfo`, or `"unknown"`.
pub fn read_cpu_model() -> String {
    std::fs::read_to_string("/proc/cpuinfo")
        .ok()
        .and_then(|s| parse_cpu_model(&s))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Total RAM from `/proc/meminfo`, rounded to whole GiB, or 0.
pub fn read_total_ram_gb() -> u64 {
    std::fs::read_to_string("/proc/meminfo")
        .ok()
        .and_then(|s| parse_mem_total_gb(&s))
        .unwrap_or(0)
}

fn parse_cpu_model(cpuinfo: &str) -> Option<String> {
    cpuinfo
        .lines()
        .find(|l| l.starts_with("model name"))
        .and_then(|l| l.split_once(':'))
        .map(|(_, v)| v.trim().to_string())
}

fn parse_mem_total_gb(meminfo: &str) -> Option<u64> {
    let line = meminfo.lines().find(|l| l.starts_with("MemTotal:"))?;
    let kb: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some((kb + (1 << 19)) >> 20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cpu_model() {
        let s = "processor\t: 0\nvendor_id\t: GenuineIntel\nmodel name\t: Intel(R) Xeon(R) CPU @ 2.20GHz\n";
        assert_eq!(
            parse_cpu_model(s).as_deref(),
            Some("Intel(R) Xeon(R) CPU @ 2.20GHz")
        );
        assert_eq!(parse_cpu_model("processor\t: 0\n"), None);
    }

    #[test]
    fn parses_mem_total() {
        let s = "MemTotal:       16303392 kB\nMemFree:         1234 kB\n";
        assert_eq!(parse_mem_total_gb(s), Some(16));
        assert_eq!(parse_mem_total_gb("MemFree: 1 kB\n"), None);
    }
}

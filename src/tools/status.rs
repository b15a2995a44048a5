//! ToolBank Status Tool
//!
//! Provides runtime status information and usage instructions.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::health::UnitSystem;

/// Calculator usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# ToolBank Calculator Instructions

ToolBank exposes three health calculators. Each call is independent; nothing
is stored between calls.

## Units

Every calculator accepts an optional `unit_system`:

| unit_system | weight | height |
|-------------|--------|--------|
| `metric`    | kg     | cm     |
| `imperial`  | lb     | in     |

When omitted, the server default is used (see `toolbank_status`).
Height is **centimeters**, not meters, in metric mode. Convert feet+inches to
total inches before calling (5 ft 9 in = 69 in).

---

## calculate_bmi

**Inputs:** `weight`, `height`, `unit_system?`

Returns:
- `bmi` rounded to one decimal
- `category` / `label`: Underweight (< 18.5), Normal weight (18.5 to < 25),
  Overweight (25 to < 30), Obese (>= 30)
- `healthy_weight_range`: whole-number weights for BMI 18.5-24.9 at this
  height, in the caller's unit system

---

## calculate_calories

**Inputs:** `weight`, `height`, `age` (years), `sex` (`male` | `female`),
`activity_level`, `unit_system?`

| activity_level | Multiplier | Meaning |
|----------------|------------|---------|
| `sedentary`    | 1.2   | little or no exercise |
| `light`        | 1.375 | 1-3 days/week |
| `moderate`     | 1.55  | 3-5 days/week |
| `active`       | 1.725 | 6-7 days/week |
| `very_active`  | 1.9   | physical job or twice-daily training |

Returns whole kcal/day:
- `bmr` (Mifflin-St Jeor) and `tdee` (BMR x multiplier)
- `weight_loss`: mild (TDEE - 250), moderate (TDEE - 500), aggressive (TDEE - 750)
- `weight_gain`: mild (TDEE + 250), moderate (TDEE + 500)

---

## calculate_water_intake

**Inputs:** `weight`, `activity_level` (`low` | `moderate` | `high`),
`climate?` (`normal` | `hot` | `humid`, default `normal`), `unit_system?`

Total = weight_kg x 35 ml x activity (1.0 / 1.2 / 1.5) x climate (1.0 / 1.2 / 1.15)

Returns `liters`, `cups` (240 ml) and `ounces` (US fl oz), each to one decimal.

---

## Errors

Weight, height and age must be greater than zero. Unknown category names are
rejected with the list of accepted values. Fix the argument and call again.

Use `calculator_tables` to fetch every multiplier and threshold as JSON.
"#;

/// Runtime status of the ToolBank service
#[derive(Debug, Clone, Serialize)]
pub struct ToolbankStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Configuration
    pub default_unit_system: UnitSystem,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
    default_unit_system: UnitSystem,
}

impl StatusTracker {
    pub fn new(default_unit_system: UnitSystem) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now().to_rfc3339(),
            default_unit_system,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> ToolbankStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ToolbankStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            default_unit_system: self.default_unit_system,
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

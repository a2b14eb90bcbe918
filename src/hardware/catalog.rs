// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Static CPU and GPU score tables
//!
//! Scores are synthetic and normalized so that a current mainstream part lands
//! near 100. Prices are street prices at [`prices_as_of`].

use chrono::NaiveDate;

use super::component::{ComponentKind, CpuSpecs, GpuSpecs, HardwareComponent, Specs};
use super::tier::Tier;

#[allow(clippy::too_many_arguments)]
const fn cpu(
    id: &'static str,
    name: &'static str,
    score: f64,
    tier: Tier,
    cores_threads: (u32, u32),
    clocks_ghz: (f64, f64),
    tdp_watts: u32,
    price_usd: f64,
) -> HardwareComponent {
    HardwareComponent {
        id,
        name,
        kind: ComponentKind::Cpu,
        score,
        tier,
        specs: Specs::Cpu(CpuSpecs {
            cores: cores_threads.0,
            threads: cores_threads.1,
            base_clock_ghz: clocks_ghz.0,
            boost_clock_ghz: clocks_ghz.1,
        }),
        tdp_watts,
        price_usd,
    }
}

#[allow(clippy::too_many_arguments)]
const fn gpu(
    id: &'static str,
    name: &'static str,
    score: f64,
    tier: Tier,
    vram_gb: u32,
    boost_clock_mhz: u32,
    tdp_watts: u32,
    price_usd: f64,
) -> HardwareComponent {
    HardwareComponent {
        id,
        name,
        kind: ComponentKind::Gpu,
        score,
        tier,
        specs: Specs::Gpu(GpuSpecs {
            vram_gb,
            boost_clock_mhz,
        }),
        tdp_watts,
        price_usd,
    }
}

#[rustfmt::skip]
pub static CPUS: &[HardwareComponent] = &[
    cpu("ryzen-3-4100", "AMD Ryzen 3 4100", 40.0, Tier::EntryLevel, (4, 8), (3.8, 4.0), 65, 70.0),
    cpu("i3-12100f", "Intel Core i3-12100F", 52.0, Tier::EntryLevel, (4, 8), (3.3, 4.3), 58, 90.0),
    cpu("ryzen-5-5600", "AMD Ryzen 5 5600", 64.0, Tier::MidRange, (6, 12), (3.5, 4.4), 65, 130.0),
    cpu("ryzen-5-5600x", "AMD Ryzen 5 5600X", 67.0, Tier::MidRange, (6, 12), (3.7, 4.6), 65, 150.0),
    cpu("i5-12400f", "Intel Core i5-12400F", 68.0, Tier::MidRange, (6, 12), (2.5, 4.4), 65, 120.0),
    cpu("i5-13400f", "Intel Core i5-13400F", 75.0, Tier::MidRange, (10, 16), (2.5, 4.6), 65, 180.0),
    cpu("ryzen-5-7600x", "AMD Ryzen 5 7600X", 84.0, Tier::MidRange, (6, 12), (4.7, 5.3), 105, 200.0),
    cpu("ryzen-7-5800x3d", "AMD Ryzen 7 5800X3D", 88.0, Tier::HighEnd, (8, 16), (3.4, 4.5), 105, 300.0),
    cpu("i5-13600k", "Intel Core i5-13600K", 92.0, Tier::HighEnd, (14, 20), (3.5, 5.1), 125, 260.0),
    cpu("i5-14600k", "Intel Core i5-14600K", 95.0, Tier::HighEnd, (14, 20), (3.5, 5.3), 125, 280.0),
    cpu("ryzen-7-7700x", "AMD Ryzen 7 7700X", 96.0, Tier::HighEnd, (8, 16), (4.5, 5.4), 105, 280.0),
    cpu("i7-13700k", "Intel Core i7-13700K", 104.0, Tier::HighEnd, (16, 24), (3.4, 5.4), 125, 350.0),
    cpu("i7-14700k", "Intel Core i7-14700K", 110.0, Tier::HighEnd, (20, 28), (3.4, 5.6), 125, 380.0),
    cpu("ryzen-7-7800x3d", "AMD Ryzen 7 7800X3D", 112.0, Tier::Enthusiast, (8, 16), (4.2, 5.0), 120, 400.0),
    cpu("i9-13900k", "Intel Core i9-13900K", 118.0, Tier::Enthusiast, (24, 32), (3.0, 5.8), 125, 480.0),
    cpu("core-ultra-9-285k", "Intel Core Ultra 9 285K", 120.0, Tier::Enthusiast, (24, 24), (3.7, 5.7), 125, 590.0),
    cpu("i9-14900k", "Intel Core i9-14900K", 122.0, Tier::Enthusiast, (24, 32), (3.2, 6.0), 125, 540.0),
    cpu("ryzen-7-9800x3d", "AMD Ryzen 7 9800X3D", 125.0, Tier::Enthusiast, (8, 16), (4.7, 5.2), 120, 480.0),
    cpu("ryzen-9-7950x", "AMD Ryzen 9 7950X", 128.0, Tier::Enthusiast, (16, 32), (4.5, 5.7), 170, 550.0),
    cpu("ryzen-9-9950x", "AMD Ryzen 9 9950X", 135.0, Tier::Enthusiast, (16, 32), (4.3, 5.7), 170, 600.0),
];

#[rustfmt::skip]
pub static GPUS: &[HardwareComponent] = &[
    gpu("gtx-1650", "NVIDIA GeForce GTX 1650", 30.0, Tier::EntryLevel, 4, 1665, 75, 150.0),
    gpu("rtx-3050", "NVIDIA GeForce RTX 3050", 42.0, Tier::EntryLevel, 8, 1777, 130, 200.0),
    gpu("rx-6600", "AMD Radeon RX 6600", 55.0, Tier::EntryLevel, 8, 2491, 132, 200.0),
    gpu("rtx-3060", "NVIDIA GeForce RTX 3060", 58.0, Tier::MidRange, 12, 1777, 170, 280.0),
    gpu("rx-7600", "AMD Radeon RX 7600", 62.0, Tier::MidRange, 8, 2655, 165, 260.0),
    gpu("rtx-4060", "NVIDIA GeForce RTX 4060", 64.0, Tier::MidRange, 8, 2460, 115, 300.0),
    gpu("rx-6700-xt", "AMD Radeon RX 6700 XT", 72.0, Tier::MidRange, 12, 2581, 230, 320.0),
    gpu("rtx-4060-ti", "NVIDIA GeForce RTX 4060 Ti", 74.0, Tier::MidRange, 8, 2535, 160, 390.0),
    gpu("rtx-3070", "NVIDIA GeForce RTX 3070", 78.0, Tier::HighEnd, 8, 1725, 220, 350.0),
    gpu("rx-7700-xt", "AMD Radeon RX 7700 XT", 82.0, Tier::HighEnd, 12, 2544, 245, 400.0),
    gpu("rtx-4070", "NVIDIA GeForce RTX 4070", 88.0, Tier::HighEnd, 12, 2475, 200, 550.0),
    gpu("rx-7800-xt", "AMD Radeon RX 7800 XT", 92.0, Tier::HighEnd, 16, 2430, 263, 500.0),
    gpu("rtx-4070-super", "NVIDIA GeForce RTX 4070 SUPER", 96.0, Tier::HighEnd, 12, 2475, 220, 600.0),
    gpu("rtx-4070-ti-super", "NVIDIA GeForce RTX 4070 Ti SUPER", 106.0, Tier::HighEnd, 16, 2610, 285, 800.0),
    gpu("rx-7900-xt", "AMD Radeon RX 7900 XT", 108.0, Tier::Enthusiast, 20, 2400, 315, 700.0),
    gpu("rtx-4080-super", "NVIDIA GeForce RTX 4080 SUPER", 118.0, Tier::Enthusiast, 16, 2550, 320, 1000.0),
    gpu("rx-7900-xtx", "AMD Radeon RX 7900 XTX", 120.0, Tier::Enthusiast, 24, 2500, 355, 930.0),
    gpu("rtx-5080", "NVIDIA GeForce RTX 5080", 126.0, Tier::Enthusiast, 16, 2617, 360, 1000.0),
    gpu("rtx-4090", "NVIDIA GeForce RTX 4090", 140.0, Tier::Enthusiast, 24, 2520, 450, 1800.0),
];

/// Date the catalog prices were collected
pub fn prices_as_of() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 1, 15)
}

/// Full table for one component kind
pub fn components(kind: ComponentKind) -> &'static [HardwareComponent] {
    match kind {
        ComponentKind::Cpu => CPUS,
        ComponentKind::Gpu => GPUS,
    }
}

/// Look up a component by id (case-insensitive)
pub fn lookup_component(kind: ComponentKind, id: &str) -> Option<&'static HardwareComponent> {
    let id = id.trim();
    let found = components(kind)
        .iter()
        .find(|c| c.id.eq_ignore_ascii_case(id));
    if found.is_none() {
        tracing::debug!(%kind, id, "component not in catalog");
    }
    found
}

/// Components of one kind in the given tier, in table order
pub fn filter_by_tier(kind: ComponentKind, tier: Tier) -> Vec<&'static HardwareComponent> {
    components(kind).iter().filter(|c| c.tier == tier).collect()
}

/// Case-insensitive substring search over ids and display names
pub fn search(kind: ComponentKind, text: &str) -> Vec<&'static HardwareComponent> {
    components(kind)
        .iter()
        .filter(|c| c.matches_text(text))
        .collect()
}

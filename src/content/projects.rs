use crate::navigation::RecordId;
use crate::records::Record;

pub struct Spec {
    pub label: &'static str,
    pub value: &'static str,
    pub sub: &'static str,
    pub details: &'static str,
}

pub struct Metric {
    pub target: f64,
    pub decimals: usize,
    pub suffix: &'static str,
    pub label: &'static str,
    pub desc: &'static str,
}

pub struct Milestone {
    pub date: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Project {
    /// Canonical key used by portfolio cards ("01", "02", ...).
    pub key: &'static str,
    /// Map pins address projects by region name.
    pub aliases: &'static [&'static str],
    pub code: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub year: &'static str,
    pub tags: &'static [&'static str],
    pub summary: &'static str,
    pub hero_image: &'static str,
    pub structure: &'static str,
    pub partner: &'static str,
    pub date: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub outcome: &'static str,
    pub total_asset_value: &'static str,
    pub beneficiaries: &'static str,
    pub spv: &'static str,
    pub specs: &'static [Spec],
    pub metrics: &'static [Metric],
    pub gallery: &'static [&'static str],
    pub timeline: &'static [Milestone],
}

impl Record for Project {
    /// Compares against the id's string form, so the number 1 is not "01".
    fn matches(&self, id: &RecordId) -> bool {
        let id = id.to_string();
        self.key == id || self.aliases.iter().any(|alias| *alias == id)
    }
}

pub static PROJECTS: [Project; 2] = [
    Project {
        key: "01",
        aliases: &["imo", "benue", "niger", "03"],
        code: "NG-JIG-001",
        title: "Jigawa Rice Milling Hub.",
        location: "Phase 1 • Gwaram LGA, Jigawa State",
        year: "2024",
        tags: &["Solar Milling", "PUE"],
        summary: "A flagship deployment integrating 200kW solar capacity with industrial-grade rice hulling machinery, acting as a reliable anchor tenant for the local mini-grid.",
        hero_image: "https://images.unsplash.com/photo-1595838788863-29a377d0a7d5?q=80&w=2874&auto=format&fit=crop",
        structure: "Lease-to-Own",
        partner: "Grid Dev Co",
        date: "Q3 2024",
        challenge: "Gwaram processing clusters relied exclusively on fossil fuels. Diesel costs exceeding ₦1,200/liter eroded SME margins by 45%. Meanwhile, the local mini-grid suffered from low daytime utilization, threatening its long-term viability.",
        solution: "AgAsset Co deployed 5 industrial-grade electric rice hullers through a lease-to-own structure. These machines act as Anchor Loads, providing the grid with consistent daytime demand while slashing energy costs for the processors.",
        outcome: "100% clean energy transition across the hub. Average processor income has increased by 35% within the first 6 months of operation.",
        total_asset_value: "₦245,000,000",
        beneficiaries: "15 SMEs",
        spv: "AgAsset SPV-01",
        specs: &[
            Spec { label: "Financing Model", value: "Lease-to-Own", sub: "24 Month Term", details: "SMEs pay off the asset through daily or weekly installments aligned with their production cycles. Title transfers upon final payment." },
            Spec { label: "Credit Enhancement", value: "IoT Lockout", sub: "20% Down-payment", details: "Integrated firmware allows remote asset immobilization in the event of default, reducing the need for physical collateral." },
            Spec { label: "Current Ownership", value: "AgAsset Co", sub: "Special Purpose Vehicle", details: "Assets are held within a ring-fenced SPV to ensure investor protection during the repayment lifecycle." },
            Spec { label: "Equipment Profile", value: "5x 10HP Hullers", sub: "Industrial Grade", details: "High-efficiency copper-wound motors designed for continuous operation in high-temperature environments." },
            Spec { label: "Grid Integration", value: "3-Phase AC", sub: "Smart Metered Hub", details: "Smart metering allows real-time load synchronization and daytime energy optimization." },
            Spec { label: "Daily Runtime", value: "6.5 Hours", sub: "Peak Solar Optimized", details: "Operating hours coincide with peak photovoltaic generation, minimizing strain on battery storage." },
        ],
        metrics: &[
            Metric { target: 35.0, decimals: 0, suffix: "%", label: "Income Increase", desc: "Net growth in processor profit margins." },
            Metric { target: 4.5, decimals: 1, suffix: "T", label: "Daily Output", desc: "Tons of rice processed per single shift." },
            Metric { target: 12.5, decimals: 1, suffix: "k", label: "Fuel Displaced", desc: "Liters of diesel removed from the cycle." },
            Metric { target: 15.0, decimals: 0, suffix: "", label: "Jobs Created", desc: "New direct processing and logistics roles." },
        ],
        gallery: &[
            "https://images.unsplash.com/photo-1625246333195-58197bd47f3b?q=80&w=2940&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=2940&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=2940&auto=format&fit=crop",
        ],
        timeline: &[
            Milestone { date: "Jan 2024", title: "Origination", desc: "Feasibility study and credit vetting." },
            Milestone { date: "Apr 2024", title: "Deployment", desc: "Technical installation of huller units." },
            Milestone { date: "Oct 2024", title: "Management", desc: "Uptime: 99.2% | Repayment: On-Track." },
        ],
    },
    Project {
        key: "02",
        aliases: &["kaduna", "ogun", "kano"],
        code: "NG-KAD-002",
        title: "Kaduna Cold Chain Facility.",
        location: "Cluster B • Zaria, Kaduna State",
        year: "2023",
        tags: &["Storage", "Logistics"],
        summary: "Solar-powered cold storage extending the shelf life of tomatoes and peppers from 2 days to 21 days for over 500 local farmers.",
        hero_image: "https://images.unsplash.com/photo-1542838132-92c53300491e?q=80&w=2874&auto=format&fit=crop",
        structure: "PUE-as-a-Service",
        partner: "Solar Refrigeration Ltd",
        date: "Q1 2024",
        challenge: "Over 50% of tomato harvests in Zaria were lost within 48 hours due to extreme heat and zero cooling capacity. Farmers were forced to sell at distress prices to avoid total loss.",
        solution: "Deployment of 10 modular blast-cooling units powered by an integrated off-grid solar array, letting farmers hold produce for up to 21 days while waiting for better prices.",
        outcome: "Post-harvest spoilage reduced from 55% to less than 4%. Local market price stability improved by 22% during peak harvest cycles.",
        total_asset_value: "₦180,000,000",
        beneficiaries: "500+ Smallholders",
        spv: "AgAsset SPV-02",
        specs: &[
            Spec { label: "Financing Model", value: "Fee-Per-Crate", sub: "Pay-as-you-Store", details: "Users pay a small fee per crate stored, removing upfront costs for farmers while generating consistent cashflow." },
            Spec { label: "Thermal Storage", value: "Phase Change", sub: "Integrated Cold Bank", details: "Phase-change materials hold temperature overnight without battery drain." },
            Spec { label: "Energy Source", value: "35kW Solar", sub: "Off-Grid Hybrid", details: "Dedicated solar array with lithium-ion backup keeps climate control running around the clock." },
            Spec { label: "Temp Control", value: "2°C Stable", sub: "Precision Monitoring", details: "Produce is held at optimal metabolic dormancy to extend shelf life without freezing damage." },
        ],
        metrics: &[
            Metric { target: 95.0, decimals: 0, suffix: "%", label: "Spoilage Reduction", desc: "Eliminating post-harvest waste for perishables." },
            Metric { target: 21.0, decimals: 0, suffix: " Days", label: "Shelf Life", desc: "Maximum cold-storage preservation time." },
            Metric { target: 250.0, decimals: 0, suffix: "T", label: "Monthly Capacity", desc: "Tons processed through the Zaria node." },
            Metric { target: 120.0, decimals: 0, suffix: "", label: "Subscriptions", desc: "Smallholder groups using PUE-as-a-Service." },
        ],
        gallery: &[
            "https://images.unsplash.com/photo-1586771107445-d3ca888129ff?q=80&w=2944&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1605000797499-95a51c5269ae?q=80&w=2942&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1591857177580-dc82b9ac4e10?q=80&w=2071&auto=format&fit=crop",
        ],
        timeline: &[
            Milestone { date: "Nov 2023", title: "Strategic Planning", desc: "Site mapping for tomato corridors." },
            Milestone { date: "Feb 2024", title: "Commissioning", desc: "Deployment of 10 modular blast units." },
            Milestone { date: "Present", title: "Expansion", desc: "Planning for 5 additional nodes in Kaduna." },
        ],
    },
];

/// Pin on the Home page map. `id` doubles as a project alias.
pub struct MapLocation {
    pub id: &'static str,
    pub state_name: &'static str,
    pub project_title: &'static str,
    pub description: &'static str,
    pub tag: &'static str,
    pub sdg: &'static str,
    pub top: &'static str,
    pub left: &'static str,
}

pub static MAP_LOCATIONS: [MapLocation; 5] = [
    MapLocation {
        id: "imo",
        state_name: "Imo State",
        project_title: "Solar Hybrid Mini Grid Solution",
        description: "Providing constant power to a cluster of 15 SMEs, specializing in localized palm oil processing and packaging.",
        tag: "Renewable Energy",
        sdg: "SDG 7",
        top: "65%",
        left: "42%",
    },
    MapLocation {
        id: "niger",
        state_name: "Niger State",
        project_title: "Hydro-Agri Integration Hub",
        description: "A pioneer project linking small-scale hydro-power to rice milling facilities, reducing diesel dependency by 95%.",
        tag: "Sustainable Infrastructure",
        sdg: "SDG 9",
        top: "45%",
        left: "30%",
    },
    MapLocation {
        id: "ogun",
        state_name: "Ogun State",
        project_title: "Industrial Cold Storage Cluster",
        description: "Powering a network of 10 modular cold rooms to eliminate waste in the perishables supply chain for urban markets.",
        tag: "Agro-Logistics",
        sdg: "SDG 12",
        top: "72%",
        left: "15%",
    },
    MapLocation {
        id: "kaduna",
        state_name: "Kaduna State",
        project_title: "Grain Processing Grid",
        description: "Integrated milling and threshing units powered by solar, allowing farmers to process harvest at point-of-sale.",
        tag: "PUE-as-a-Service",
        sdg: "SDG 1",
        top: "35%",
        left: "40%",
    },
    MapLocation {
        id: "kano",
        state_name: "Kano State",
        project_title: "Tomato Preservation Node",
        description: "Solar blast cooling units that preserve tomato harvest for up to 3 weeks, stabilizing market prices.",
        tag: "Food Security",
        sdg: "SDG 2",
        top: "15%",
        left: "48%",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::resolve;

    #[test]
    fn canonical_keys_resolve() {
        let hit = resolve(&PROJECTS, Some(&RecordId::from("02"))).unwrap();
        assert!(!hit.is_fallback());
        assert_eq!(hit.record().code, "NG-KAD-002");
    }

    #[test]
    fn region_aliases_resolve() {
        for (region, code) in [
            ("kaduna", "NG-KAD-002"),
            ("ogun", "NG-KAD-002"),
            ("kano", "NG-KAD-002"),
            ("imo", "NG-JIG-001"),
            ("benue", "NG-JIG-001"),
            ("niger", "NG-JIG-001"),
        ] {
            let hit = resolve(&PROJECTS, Some(&RecordId::from(region))).unwrap();
            assert!(!hit.is_fallback(), "{}", region);
            assert_eq!(hit.record().code, code);
        }
    }

    #[test]
    fn retired_key_three_opens_the_jigawa_hub() {
        let hit = resolve(&PROJECTS, Some(&RecordId::from("03"))).unwrap();
        assert!(!hit.is_fallback());
        assert_eq!(hit.record().key, "01");
    }

    #[test]
    fn numeric_one_is_not_key_zero_one() {
        let miss = resolve(&PROJECTS, Some(&RecordId::Number(1))).unwrap();
        assert!(miss.is_fallback());
        assert_eq!(miss.record().key, "01");
    }

    #[test]
    fn missing_project_id_uses_first() {
        let miss = resolve(&PROJECTS, None).unwrap();
        assert!(miss.is_fallback());
        assert_eq!(miss.record().key, "01");
    }

    #[test]
    fn every_map_pin_opens_a_real_project() {
        for pin in MAP_LOCATIONS.iter() {
            let hit = resolve(&PROJECTS, Some(&RecordId::from(pin.id))).unwrap();
            assert!(!hit.is_fallback(), "{}", pin.id);
        }
    }
}

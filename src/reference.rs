//! Reference catalog: the portfolio's own skills, projects and framework notes.
//!
//! This is the content the Skills section ships with. It doubles as a worked
//! example of a complete catalog: three category cards, evidence groups that
//! reuse the same six projects with skill-specific proof text, framework
//! notes, and deliberately unfinished entries that render "coming soon".
//!
//! - `ISO/IEC 27001` has no framework note yet.
//! - `Security Monitoring & Detection Engineering` names a group that has no
//!   evidence yet.
//!
//! # See also
//!
//! - `demos/skills_walkthrough.rs` drives this catalog through hover, focus
//!   and scroll events.

use alloc::vec::Vec;

use crate::catalog::SkillCatalog;
use crate::chips::DisplayChip;
use crate::error::CatalogError;
use crate::evidence::EvidenceRecord;

// ─── Projects ────────────────────────────────────────────────────────────────

/// Project titles and write-up links, in the order the Projects section lists them.
pub const PROJECTS: [(&str, &str); 6] = [
    (
        "Building an IDS with Snort 3",
        "https://medium.com/@vignesh3967/building-my-first-ids-lab-with-snort-3-37ac1ebc0345",
    ),
    (
        "Active Directory Detection & Response",
        "https://medium.com/@vignesh3967/building-a-complete-soc-lab-active-directory-detection-response-automation-project-f48d2e82a84f",
    ),
    (
        "SOC Automation – Wazuh + TheHive + Shuffle",
        "https://medium.com/@vignesh3967/soc-automation-with-soar-9203ed8f33b9",
    ),
    (
        "SOAR-EDR Integration – LimaCharlie + Tines",
        "https://medium.com/@vignesh3967/soar-edr-project-automating-incident-response-with-limacharlie-and-tines-9754364ec30c",
    ),
    (
        "30-Day SOC Challenge – ELK Stack",
        "https://medium.com/@vignesh3967/installing-elastic-defend-a-step-by-step-guide-to-protecting-your-endpoints-6ee9a0008f96",
    ),
    (
        "Active Directory Home Lab with Splunk",
        "https://medium.com/@vignesh3967/simulating-cyber-attack-and-analyzing-logs-in-an-active-directory-home-lab-with-splunk-640c4f88e667",
    ),
];

const SNORT: usize = 0;
const AD_RESPONSE: usize = 1;
const SOC_AUTOMATION: usize = 2;
const SOAR_EDR: usize = 3;
const ELK: usize = 4;
const AD_SPLUNK: usize = 5;

// ─── Chips ───────────────────────────────────────────────────────────────────

/// Category card titles, in display order.
pub const CATEGORIES: [&str; 3] = [
    "Core Cybersecurity Concepts",
    "Frameworks & Standards",
    "Tools & Platforms",
];

const CORE: [&str; 6] = [
    "SIEM & Log Analysis",
    "Intrusion Detection & Prevention (Snort 3, rule authoring, PCAP analysis)",
    "SOAR & Automation Workflows",
    "Incident Response & Alert Triage",
    "Threat Detection & IOC Enrichment",
    "Security Monitoring & Detection Engineering",
];

const FRAMEWORKS: [&str; 4] = [
    "MITRE ATT&CK",
    "NIST Cybersecurity Framework",
    "ISO/IEC 27001",
    "Cyber Kill Chain",
];

const TOOLS: [&str; 4] = [
    "Snort 3, PulledPork3 (rule automation)",
    "Splunk, Wazuh, ELK Stack",
    "LimaCharlie, Tines, Shuffle, TheHive",
    "VirusTotal, OS Ticket",
];

const FRAMEWORK_NOTES: [(&str, &str); 3] = [
    ("MITRE ATT&CK", "Used to design & validate detections across adversary TTPs."),
    (
        "NIST Cybersecurity Framework",
        "Maps lab work onto Identify, Protect, Detect, Respond and Recover.",
    ),
    (
        "Cyber Kill Chain",
        "Frames alert triage by intrusion stage, from recon to actions on objectives.",
    ),
];

// ─── Evidence ────────────────────────────────────────────────────────────────

/// `(group key, [(project, proof)])`. Every chip's group key equals its label.
const EVIDENCE: [(&str, &[(usize, &str)]); 9] = [
    (
        "SIEM & Log Analysis",
        &[
            (AD_SPLUNK, "Tuned Splunk detections and parsing for AD attack patterns."),
            (ELK, "Monitored Windows/Linux telemetry with Elastic for 30 days."),
            (AD_RESPONSE, "Detected unauthorized RDP attempts in Splunk."),
        ],
    ),
    (
        "Intrusion Detection & Prevention (Snort 3, rule authoring, PCAP analysis)",
        &[(SNORT, "Compiled Snort 3 from source, wrote custom rules, validated against malicious PCAPs (WhisperGate).")],
    ),
    (
        "SOAR & Automation Workflows",
        &[
            (SOC_AUTOMATION, "Automated triage in TheHive with VirusTotal enrichment and response playbooks."),
            (SOAR_EDR, "Host isolation for Lazagne.exe detections via Tines playbooks."),
        ],
    ),
    (
        "Incident Response & Alert Triage",
        &[
            (AD_RESPONSE, "Automated AD account disablement via LDAP with Slack alerts; response time down 85%."),
            (SOAR_EDR, "Real-time Slack/Email alerts and automatic host isolation."),
            (ELK, "Automated alert-to-ticket creation with OS Ticket."),
        ],
    ),
    (
        "Threat Detection & IOC Enrichment",
        &[
            (SOC_AUTOMATION, "Enriched Mimikatz alerts with VirusTotal lookups."),
            (SNORT, "Rule hits validated against WhisperGate PCAP indicators."),
        ],
    ),
    (
        "Snort 3, PulledPork3 (rule automation)",
        &[(SNORT, "Automated rule updates with PulledPork3.")],
    ),
    (
        "Splunk, Wazuh, ELK Stack",
        &[
            (AD_SPLUNK, "Splunk detections for Atomic Red Team and Crowbar attacks."),
            (SOC_AUTOMATION, "Wazuh with Sysmon for credential-dumping detection."),
            (ELK, "Elastic Defend across Windows and Linux hosts."),
        ],
    ),
    (
        "LimaCharlie, Tines, Shuffle, TheHive",
        &[
            (SOAR_EDR, "LimaCharlie detections driving Tines playbooks."),
            (SOC_AUTOMATION, "Shuffle workflows creating TheHive cases."),
            (AD_RESPONSE, "Shuffle automation for account disablement."),
        ],
    ),
    (
        "VirusTotal, OS Ticket",
        &[
            (SOC_AUTOMATION, "VirusTotal hash enrichment inside the triage workflow."),
            (ELK, "OS Ticket as the alert ticketing sink."),
        ],
    ),
];

fn evidence_records(entries: &[(usize, &str)]) -> Vec<EvidenceRecord> {
    entries
        .iter()
        .map(|&(project, proof)| {
            let (title, link) = PROJECTS[project];
            EvidenceRecord::new(title, link, proof)
        })
        .collect()
}

/// Build the reference catalog.
pub fn catalog() -> Result<SkillCatalog, CatalogError> {
    let mut builder = SkillCatalog::builder();
    for (group, entries) in EVIDENCE {
        builder = builder.evidence(group, evidence_records(entries));
    }
    for (label, note) in FRAMEWORK_NOTES {
        builder = builder.framework_note(label, note);
    }
    builder
        .category(CATEGORIES[0], CORE.iter().map(|&l| DisplayChip::core(l, l)).collect())
        .category(CATEGORIES[1], FRAMEWORKS.iter().map(|&l| DisplayChip::framework(l)).collect())
        .category(CATEGORIES[2], TOOLS.iter().map(|&l| DisplayChip::tool(l, l)).collect())
        .build()
}

/// The reference catalog, built on first use and shared for the process lifetime.
#[cfg(feature = "std")]
pub fn shared() -> &'static SkillCatalog {
    static SHARED: once_cell::sync::Lazy<SkillCatalog> =
        once_cell::sync::Lazy::new(|| catalog().expect("reference catalog data is valid"));
    &SHARED
}

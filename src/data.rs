//! The hardcoded curriculum dataset.
//!
//! All text is ASCII-only.  Declaration order is the rendering order and must
//! not be changed: the sections trace the chronological 18-month progression.

use crate::model::{Curriculum, Entry, Section};

/// Title shown in the running header on every page.
pub const DOCUMENT_TITLE: &str = "18-Month Ivy-Level Cybersecurity Curriculum";

/// Introductory paragraph emitted near the top of the first page.
pub const INTRO: &str = "This 18-month, Ivy-level aligned cybersecurity curriculum is paced at \
     ~7-10 hours per week. Each section pairs elite online courses with textbooks and lab \
     resources. Links are clickable.";

/// Builds the full ten-section curriculum in chronological order.
pub fn standard_curriculum() -> Curriculum {
    Curriculum::new(DOCUMENT_TITLE)
        .with_intro(INTRO.to_string())
        .with_section(
            Section::new("Months 1-2", "Cybersecurity Foundations")
                .with_entry(
                    Entry::new("Course:", "CS50's Introduction to Cybersecurity (HarvardX)")
                        .with_link("https://www.edx.org/learn/cybersecurity/harvard-university-cs50-s-introduction-to-cybersecurity"),
                )
                .with_entry(
                    Entry::new(
                        "Textbook:",
                        "Computer Security: Principles and Practice (Stallings & Brown, 5th ed.)",
                    )
                    .with_link("https://www.pearson.com/en-us/subject-catalog/p/computer-security-principles-and-practice/P200000005355/9780137465383"),
                )
                .with_entry(
                    Entry::new("Supplement:", "Cybersecurity for Everyone (University of Maryland)")
                        .with_link("https://www.coursera.org/learn/cyber-security"),
                ),
        )
        .with_section(
            Section::new("Months 3-4", "Cryptography & Secure Communications")
                .with_entry(
                    Entry::new("Course:", "Cryptography I (Stanford University)")
                        .with_link("https://www.coursera.org/learn/crypto"),
                )
                .with_entry(
                    Entry::new("Textbook:", "Understanding Cryptography (Paar & Pelzl)")
                        .with_link("https://link.springer.com/book/10.1007/978-3-642-04101-3"),
                )
                .with_entry(
                    Entry::new("Reference:", "Applied Cryptography (Bruce Schneier)")
                        .with_link("https://www.schneier.com/books/applied_cryptography/"),
                ),
        )
        .with_section(
            Section::new("Months 5-6", "Software & Application Security")
                .with_entry(
                    Entry::new("Course:", "Software Security (University of Maryland)")
                        .with_link("https://www.edx.org/course/software-security"),
                )
                .with_entry(
                    Entry::new(
                        "Textbook:",
                        "The Web Application Hacker's Handbook (Stuttard & Pinto)",
                    )
                    .with_link("https://www.wiley.com/en-us/The+Web+Application+Hacker%27s+Handbook%3A+Finding+and+Exploiting+Security+Flaws%2C+2nd+Edition-p-9781118026472"),
                )
                .with_entry(
                    Entry::new("Labs:", "PortSwigger Web Security Academy")
                        .with_link("https://portswigger.net/web-security"),
                ),
        )
        .with_section(
            Section::new("Months 7-8", "Operating System & Cloud Security")
                .with_entry(
                    Entry::new("Course:", "IBM Cybersecurity Analyst - Cloud Security (Course 5)")
                        .with_link("https://www.coursera.org/professional-certificates/ibm-cybersecurity-analyst"),
                )
                .with_entry(
                    Entry::new(
                        "Textbook:",
                        "Cloud Security and Privacy (Mather, Kumaraswamy, Latif)",
                    )
                    .with_link("https://www.oreilly.com/library/view/cloud-security-and/9780596806235/"),
                )
                .with_entry(
                    Entry::new("Supplement:", "AWS Cloud Security Fundamentals")
                        .with_link("https://www.aws.training/Details/Curriculum?id=20685"),
                ),
        )
        .with_section(
            Section::new("Months 9-10", "Risk Management & Governance")
                .with_entry(
                    Entry::new(
                        "Course:",
                        "Cybersecurity: Managing Risk in the Information Age (Harvard Online)",
                    )
                    .with_link("https://pll.harvard.edu/course/cybersecurity-managing-risk-information-age"),
                )
                .with_entry(
                    Entry::new("Textbook:", "Cybersecurity and Cyberwar (Singer & Friedman)")
                        .with_link("https://www.oup.com/us/he/companion.websites/9780199918096/"),
                )
                .with_entry(
                    Entry::new("Reference:", "NIST Cybersecurity Framework")
                        .with_link("https://www.nist.gov/cyberframework"),
                ),
        )
        .with_section(
            Section::new("Months 11-12", "Digital Forensics & Incident Response")
                .with_entry(
                    Entry::new("Course:", "IBM Cybersecurity Analyst - Forensics")
                        .with_link("https://www.coursera.org/learn/cybersecurity-analyst-forensics"),
                )
                .with_entry(
                    Entry::new(
                        "Textbook:",
                        "Incident Response & Computer Forensics (Luttgens, Pepe, Mandia)",
                    )
                    .with_link("https://www.mhprofessional.com/9781260463676-usa-incident-response-computer-forensics-third-edition-group"),
                )
                .with_entry(
                    Entry::new("Labs:", "CyberDefenders: Blue-team challenges")
                        .with_link("https://cyberdefenders.org/"),
                ),
        )
        .with_section(
            Section::new("Months 13-14", "Privacy Engineering & Usability")
                .with_entry(
                    Entry::new("Course:", "Privacy and Security (MITx)")
                        .with_link("https://www.edx.org/course/privacy-and-security"),
                )
                .with_entry(
                    Entry::new(
                        "Textbook:",
                        "Privacy Engineering: A Dataflow and Ontological Approach (Ian Oliver)",
                    )
                    .with_link("https://www.springer.com/gp/book/9783319570000"),
                )
                .with_entry(
                    Entry::new("Supplement:", "Usable Security (University of Maryland)")
                        .with_link("https://www.coursera.org/learn/usable-security"),
                ),
        )
        .with_section(
            Section::new("Months 15-16", "Cyber Law & Ethics")
                .with_entry(
                    Entry::new(
                        "Course:",
                        "Cybersecurity: The Intersection of Policy and Technology (Harvard Kennedy School)",
                    )
                    .with_link("https://pll.harvard.edu/course/cybersecurity-intersection-policy-and-technology"),
                )
                .with_entry(
                    Entry::new("Textbook:", "Cybersecurity Law (Jeff Kosseff)")
                        .with_link("https://www.wiley.com/en-us/Cybersecurity+Law%2C+2nd+Edition-p-9781119859833"),
                )
                .with_entry(
                    Entry::new("Reference:", "Stanford Cyber Policy Center")
                        .with_link("https://cyber.fsi.stanford.edu/"),
                ),
        )
        .with_section(
            Section::new("Month 17", "Emerging Threats & AI Security")
                .with_entry(
                    Entry::new("Course:", "AI & Cybersecurity (Stanford / DeepLearning.AI)")
                        .with_link("https://www.coursera.org/learn/ai-cybersecurity"),
                )
                .with_entry(
                    Entry::new(
                        "Textbook:",
                        "Artificial Intelligence and Cybersecurity (Mark Stamp)",
                    )
                    .with_link("https://www.springer.com/gp/book/9783030917548"),
                )
                .with_entry(
                    Entry::new("Research:", "MIT CSAIL: Cybersecurity research")
                        .with_link("https://www.csail.mit.edu/research/cybersecurity"),
                ),
        )
        .with_section(
            Section::new("Month 18", "Capstone Project & Certification Prep")
                .with_entry(
                    Entry::new("Course:", "Cybersecurity Capstone Project (University of Maryland)")
                        .with_link("https://www.coursera.org/learn/cybersecurity-capstone"),
                )
                .with_entry(
                    Entry::new("Certification:", "ISC2 Certified in Cybersecurity (CC) on Coursera")
                        .with_link("https://www.coursera.org/learn/certified-in-cybersecurity"),
                )
                .with_entry(
                    Entry::new("Labs:", "TryHackMe (hands-on) / Hack The Box")
                        .with_link("https://tryhackme.com/"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_has_ten_sections_of_three_entries() {
        let curriculum = standard_curriculum();
        assert_eq!(curriculum.sections().len(), 10);
        for section in curriculum.sections() {
            assert_eq!(section.entries().len(), 3, "section {}", section.title());
        }
    }

    #[test]
    fn dataset_passes_validation() {
        assert_eq!(standard_curriculum().validate(), Ok(()));
    }

    #[test]
    fn dataset_is_chronological() {
        let curriculum = standard_curriculum();
        assert_eq!(curriculum.sections()[0].period(), "Months 1-2");
        assert_eq!(curriculum.sections()[9].period(), "Month 18");
    }

    #[test]
    fn dataset_text_is_ascii_only() {
        let curriculum = standard_curriculum();
        assert!(curriculum.title().is_ascii());
        assert!(curriculum.intro().unwrap().is_ascii());
        for section in curriculum.sections() {
            assert!(section.heading().is_ascii());
            for entry in section.entries() {
                assert!(entry.label().is_ascii());
                assert!(entry.text().is_ascii());
                if let Some(link) = entry.link() {
                    assert!(link.is_ascii());
                }
            }
        }
    }

    #[test]
    fn every_entry_carries_a_link() {
        // The shipped dataset links every recommendation; plain entries are
        // still supported by the model and the assembler.
        let curriculum = standard_curriculum();
        let linked = curriculum
            .sections()
            .iter()
            .flat_map(|section| section.entries())
            .filter(|entry| entry.link().is_some())
            .count();
        assert_eq!(linked, 30);
    }
}

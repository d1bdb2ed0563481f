//! Static content catalog.
//!
//! Every table the screens render lives here as `'static` data. Nothing
//! is created or mutated at runtime; [`validate`] runs once at startup
//! and turns any malformed edit of this file into a hard failure
//! instead of a silently empty panel.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icons::{CategoryIcon, CertIcon, CtaIcon, SkillIcon, WindowIcon};

/// Identifier for one of the five top-level screens.
///
/// The declaration order here is load-bearing: it defines the taskbar
/// order and the index arithmetic behind next/previous navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenId {
    About,
    Experience,
    Skills,
    Projects,
    Education,
}

impl ScreenId {
    pub const ALL: [ScreenId; 5] = [
        ScreenId::About,
        ScreenId::Experience,
        ScreenId::Skills,
        ScreenId::Projects,
        ScreenId::Education,
    ];

    /// Position in navigation order (0..=4).
    pub fn index(self) -> usize {
        match self {
            ScreenId::About => 0,
            ScreenId::Experience => 1,
            ScreenId::Skills => 2,
            ScreenId::Projects => 3,
            ScreenId::Education => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<ScreenId> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScreenId::About => "about",
            ScreenId::Experience => "experience",
            ScreenId::Skills => "skills",
            ScreenId::Projects => "projects",
            ScreenId::Education => "education",
        }
    }
}

impl std::str::FromStr for ScreenId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "about" => Ok(ScreenId::About),
            "experience" => Ok(ScreenId::Experience),
            "skills" => Ok(ScreenId::Skills),
            "projects" => Ok(ScreenId::Projects),
            "education" => Ok(ScreenId::Education),
            other => Err(CatalogError::UnknownScreen(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub headline_line1: &'static str,
    pub headline_line2: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEntry {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub icon: SkillIcon,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: CategoryIcon,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub text: &'static str,
    pub icon: CtaIcon,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectEntry {
    pub id: u32,
    pub filename: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub cta: CallToAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationEntry {
    pub id: u32,
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Certification {
    pub id: u32,
    pub name: &'static str,
    pub level: &'static str,
    pub issuer: &'static str,
    pub icon: CertIcon,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreenDescriptor {
    pub id: ScreenId,
    pub label: &'static str,
    pub window_title: &'static str,
    pub icon: WindowIcon,
}

/// Aggregate view over every table, for `retrofolio export`.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub personal: &'static PersonalInfo,
    pub experiences: &'static [ExperienceEntry],
    pub skill_categories: &'static [SkillCategory],
    pub projects: &'static [ProjectEntry],
    pub education: &'static [EducationEntry],
    pub certifications: &'static [Certification],
    pub screens: &'static [ScreenDescriptor],
}

pub static PERSONAL: PersonalInfo = PersonalInfo {
    name: "Alex Chen",
    title: "DevOps Engineer",
    headline_line1: "Architecting",
    headline_line2: "Resilient Systems",
    bio: "I bridge the gap between complex code and reliable operations. \
          Specializing in cloud infrastructure, automated CI/CD pipelines, \
          and scalable Kubernetes environments for high-growth tech teams.",
    email: "alex.chen@email.com",
    linkedin: "https://linkedin.com/in/alexchen",
    github: "https://github.com/alexchen",
};

/// Reverse-chronological by convention of the data, not enforced.
pub static EXPERIENCES: [ExperienceEntry; 3] = [
    ExperienceEntry {
        id: 1,
        title: "Senior DevOps Engineer",
        company: "TECHFLOW SYSTEMS",
        period: "2021 - Present",
        location: "San Francisco, CA",
        achievements: &[
            "Architected and maintained multi-region AWS infrastructure using Terraform, reducing latency by 40% for global users.",
            "Implemented GitOps workflows with ArgoCD and Kubernetes, increasing deployment frequency from weekly to daily.",
            "Led the migration from monolithic architecture to microservices, improving system scalability and fault tolerance.",
        ],
        technologies: &["AWS", "Kubernetes", "Terraform", "Python"],
    },
    ExperienceEntry {
        id: 2,
        title: "Cloud Infrastructure Engineer",
        company: "NEBULON DATA",
        period: "2019 - 2021",
        location: "Austin, TX",
        achievements: &[
            "Automated server provisioning and configuration management using Ansible, cutting setup time by 75%.",
            "Designed and managed ELK stack logging pipelines to process 500GB+ of daily log data.",
            "Hardened CI/CD pipelines (Jenkins) and implemented automated security scanning (SonarQube).",
        ],
        technologies: &["Jenkins", "Ansible", "Docker", "ELK"],
    },
    ExperienceEntry {
        id: 3,
        title: "Systems Administrator",
        company: "CORESERVE SOLUTIONS",
        period: "2017 - 2019",
        location: "Denver, CO",
        achievements: &[
            "Managed Linux server fleet (Ubuntu/CentOS) ensuring 99.9% uptime for critical business applications.",
            "Scripted routine maintenance tasks in Bash, eliminating manual errors and reducing support tickets.",
            "Coordinated network security updates and firewall configurations across 3 physical data centers.",
        ],
        technologies: &["Linux", "Bash", "MySQL", "Nginx"],
    },
];

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        id: "cloud",
        title: "CLOUD & INFRASTRUCTURE",
        icon: CategoryIcon::Cloud,
        skills: &[
            Skill { name: "AWS (EC2, S3, RDS)", icon: SkillIcon::Check },
            Skill { name: "Google Cloud Platform", icon: SkillIcon::Check },
            Skill { name: "Azure", icon: SkillIcon::Check },
            Skill { name: "Terraform", icon: SkillIcon::Check },
            Skill { name: "Ansible", icon: SkillIcon::Check },
            Skill { name: "CloudFormation", icon: SkillIcon::Check },
        ],
    },
    SkillCategory {
        id: "containerization",
        title: "CONTAINERIZATION",
        icon: CategoryIcon::Container,
        skills: &[
            Skill { name: "Docker", icon: SkillIcon::Box },
            Skill { name: "Kubernetes", icon: SkillIcon::Box },
            Skill { name: "Helm Charts", icon: SkillIcon::Box },
            Skill { name: "OpenShift", icon: SkillIcon::Box },
            Skill { name: "Podman", icon: SkillIcon::Box },
        ],
    },
    SkillCategory {
        id: "cicd",
        title: "CI/CD & DEVOPS TOOLS",
        icon: CategoryIcon::Terminal,
        skills: &[
            Skill { name: "Jenkins", icon: SkillIcon::Terminal },
            Skill { name: "GitLab CI", icon: SkillIcon::Terminal },
            Skill { name: "GitHub Actions", icon: SkillIcon::Terminal },
            Skill { name: "ArgoCD", icon: SkillIcon::Terminal },
            Skill { name: "CircleCI", icon: SkillIcon::Terminal },
        ],
    },
    SkillCategory {
        id: "monitoring",
        title: "MONITORING & LOGGING",
        icon: CategoryIcon::Chart,
        skills: &[
            Skill { name: "Prometheus", icon: SkillIcon::Chart },
            Skill { name: "Grafana", icon: SkillIcon::Chart },
            Skill { name: "ELK Stack", icon: SkillIcon::Chart },
            Skill { name: "Datadog", icon: SkillIcon::Chart },
            Skill { name: "PagerDuty", icon: SkillIcon::Chart },
        ],
    },
];

pub static PROJECTS: [ProjectEntry; 6] = [
    ProjectEntry {
        id: 1,
        filename: "cloud_migration.v2",
        title: "Enterprise Cloud Migration",
        description: "Orchestrated the zero-downtime migration of a monolithic legacy ERP system to AWS microservices architecture.",
        technologies: &["AWS", "Terraform", "Docker"],
        cta: CallToAction { text: "View Case Study", icon: CtaIcon::External, url: "#" },
    },
    ProjectEntry {
        id: 2,
        filename: "kube_autoscaler.yml",
        title: "K8s Custom Autoscaler",
        description: "Developed a custom Kubernetes metrics adapter to scale pods based on real-time RabbitMQ queue depth.",
        technologies: &["Go", "Kubernetes", "Helm"],
        cta: CallToAction { text: "View Repo", icon: CtaIcon::Github, url: "#" },
    },
    ProjectEntry {
        id: 3,
        filename: "pipeline_v4.jenkins",
        title: "GitOps CI/CD Pipeline",
        description: "Implemented a fully automated GitOps workflow reducing deployment time from 2 hours to 15 minutes.",
        technologies: &["ArgoCD", "GitLab CI", "Ansible"],
        cta: CallToAction { text: "View Details", icon: CtaIcon::Arrow, url: "#" },
    },
    ProjectEntry {
        id: 4,
        filename: "security_audit.log",
        title: "Infrastructure Hardening",
        description: "Comprehensive security audit and remediation of production infrastructure, achieving SOC2 compliance.",
        technologies: &["Python", "Vault", "AWS IAM"],
        cta: CallToAction { text: "View Report", icon: CtaIcon::File, url: "#" },
    },
    ProjectEntry {
        id: 5,
        filename: "monitor_dash.json",
        title: "Observability Stack",
        description: "Centralized logging and monitoring solution processing 5TB of logs daily with sub-second query latency.",
        technologies: &["ELK", "Prometheus", "Grafana"],
        cta: CallToAction { text: "View Dashboards", icon: CtaIcon::Monitor, url: "#" },
    },
    ProjectEntry {
        id: 6,
        filename: "iac_library.mod",
        title: "IaC Module Library",
        description: "Created a standardized library of reusable Terraform modules adopted by 5 different engineering teams.",
        technologies: &["Terraform", "HCL", "Git"],
        cta: CallToAction { text: "View Library", icon: CtaIcon::Book, url: "#" },
    },
];

pub static EDUCATION: [EducationEntry; 2] = [
    EducationEntry {
        id: 1,
        institution: "Polytechnic Institute of Technology",
        degree: "Master of Science in Cloud Computing",
        period: "2018 - 2020",
        location: "Boston, MA",
        description: "Specialized in distributed systems and cloud infrastructure. Thesis focused on optimizing container orchestration latencies in hybrid cloud environments.",
    },
    EducationEntry {
        id: 2,
        institution: "State University",
        degree: "Bachelor of Science in Computer Science",
        period: "2014 - 2018",
        location: "Austin, TX",
        description: "Core curriculum in algorithms, data structures, and network security. Graduated Cum Laude. Dean's List 2016-2018. Member of ACM Student Chapter.",
    },
];

pub static CERTIFICATIONS: [Certification; 4] = [
    Certification {
        id: 1,
        name: "AWS Solutions Architect",
        level: "Professional Level",
        issuer: "Issued: Aug 2023",
        icon: CertIcon::Cloud,
    },
    Certification {
        id: 2,
        name: "CKA: Kubernetes Admin",
        level: "CNCF Certified",
        issuer: "Issued: Jan 2023",
        icon: CertIcon::Container,
    },
    Certification {
        id: 3,
        name: "Terraform Associate",
        level: "HashiCorp",
        issuer: "Issued: Nov 2022",
        icon: CertIcon::Code,
    },
    Certification {
        id: 4,
        name: "CompTIA Security+",
        level: "Security Operations",
        issuer: "Issued: Jun 2021",
        icon: CertIcon::Shield,
    },
];

pub static SCREENS: [ScreenDescriptor; 5] = [
    ScreenDescriptor {
        id: ScreenId::About,
        label: "About",
        window_title: "ALEX_CHEN_PORTFOLIO.EXE",
        icon: WindowIcon::Terminal,
    },
    ScreenDescriptor {
        id: ScreenId::Experience,
        label: "Experience",
        window_title: "EXPERIENCE_LOG.TXT",
        icon: WindowIcon::Building,
    },
    ScreenDescriptor {
        id: ScreenId::Skills,
        label: "Skills",
        window_title: "TECHNICAL_SKILLS_MATRIX.EXE",
        icon: WindowIcon::Settings,
    },
    ScreenDescriptor {
        id: ScreenId::Projects,
        label: "Projects",
        window_title: "Project Explorer",
        icon: WindowIcon::Folder,
    },
    ScreenDescriptor {
        id: ScreenId::Education,
        label: "Education",
        window_title: "System Credentials",
        icon: WindowIcon::Disc,
    },
];

/// Look up the descriptor for a screen.
pub fn descriptor(id: ScreenId) -> Option<&'static ScreenDescriptor> {
    SCREENS.iter().find(|s| s.id == id)
}

/// The whole catalog as one serializable value.
pub fn catalog() -> Catalog {
    Catalog {
        personal: &PERSONAL,
        experiences: &EXPERIENCES,
        skill_categories: &SKILL_CATEGORIES,
        projects: &PROJECTS,
        education: &EDUCATION,
        certifications: &CERTIFICATIONS,
        screens: &SCREENS,
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("expected 5 screen descriptors, found {0}")]
    ScreenCount(usize),

    #[error("screen descriptor at index {index} is {found:?}, expected {expected:?}")]
    ScreenOrder {
        index: usize,
        found: ScreenId,
        expected: ScreenId,
    },

    #[error("duplicate {table} id {id}")]
    DuplicateId { table: &'static str, id: u32 },

    #[error("{table} entry {id} has an empty {field}")]
    EmptyField {
        table: &'static str,
        id: u32,
        field: &'static str,
    },

    #[error("unknown screen id: {0}")]
    UnknownScreen(String),
}

/// Startup integrity check over every table.
///
/// The navigation machine and the renderers assume the descriptor
/// sequence matches [`ScreenId::ALL`] exactly; failing here keeps those
/// assumptions honest.
pub fn validate() -> Result<(), CatalogError> {
    if SCREENS.len() != ScreenId::ALL.len() {
        return Err(CatalogError::ScreenCount(SCREENS.len()));
    }
    for (index, (descriptor, expected)) in SCREENS.iter().zip(ScreenId::ALL).enumerate() {
        if descriptor.id != expected {
            return Err(CatalogError::ScreenOrder {
                index,
                found: descriptor.id,
                expected,
            });
        }
    }

    check_unique_ids("experiences", EXPERIENCES.iter().map(|e| e.id))?;
    check_unique_ids("projects", PROJECTS.iter().map(|p| p.id))?;
    check_unique_ids("education", EDUCATION.iter().map(|e| e.id))?;
    check_unique_ids("certifications", CERTIFICATIONS.iter().map(|c| c.id))?;

    for entry in &EXPERIENCES {
        if entry.title.is_empty() {
            return Err(CatalogError::EmptyField {
                table: "experiences",
                id: entry.id,
                field: "title",
            });
        }
    }
    for project in &PROJECTS {
        if project.title.is_empty() {
            return Err(CatalogError::EmptyField {
                table: "projects",
                id: project.id,
                field: "title",
            });
        }
    }

    Ok(())
}

fn check_unique_ids(
    table: &'static str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), CatalogError> {
    let mut seen = Vec::new();
    for id in ids {
        if seen.contains(&id) {
            return Err(CatalogError::DuplicateId { table, id });
        }
        seen.push(id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_valid() {
        validate().unwrap();
    }

    #[test]
    fn screen_sequence_matches_enumeration_in_order() {
        assert_eq!(SCREENS.len(), 5);
        let ids: Vec<ScreenId> = SCREENS.iter().map(|s| s.id).collect();
        assert_eq!(ids, ScreenId::ALL.to_vec());
    }

    #[test]
    fn screen_index_round_trips() {
        for id in ScreenId::ALL {
            assert_eq!(ScreenId::from_index(id.index()), Some(id));
        }
        assert_eq!(ScreenId::from_index(5), None);
    }

    #[test]
    fn screen_id_parses_from_str() {
        for id in ScreenId::ALL {
            assert_eq!(id.as_str().parse::<ScreenId>().unwrap(), id);
        }
        assert!("desktop".parse::<ScreenId>().is_err());
    }

    #[test]
    fn experience_and_project_ids_are_unique() {
        let mut exp_ids: Vec<u32> = EXPERIENCES.iter().map(|e| e.id).collect();
        exp_ids.sort_unstable();
        exp_ids.dedup();
        assert_eq!(exp_ids.len(), EXPERIENCES.len());

        let mut project_ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        project_ids.sort_unstable();
        project_ids.dedup();
        assert_eq!(project_ids.len(), PROJECTS.len());
    }

    #[test]
    fn window_titles_match_descriptors() {
        assert_eq!(
            descriptor(ScreenId::Experience).unwrap().window_title,
            "EXPERIENCE_LOG.TXT"
        );
        assert_eq!(
            descriptor(ScreenId::About).unwrap().window_title,
            "ALEX_CHEN_PORTFOLIO.EXE"
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = check_unique_ids("projects", [1, 2, 2].into_iter()).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                table: "projects",
                id: 2
            }
        );
    }
}

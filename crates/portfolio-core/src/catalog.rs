//! Content Catalog
//!
//! The complete data set behind the page: owner profile, skills grid, and
//! project records. A built-in catalog ships with the binary; an external
//! JSON file can replace it at startup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{Profile, ProjectRecord, Skill, SkillGroup};

/// Everything the page renders, minus the generated star field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    pub skill_groups: Vec<SkillGroup>,
    pub projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Parse a catalog from a JSON string and validate it.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file and validate it.
    pub fn from_path(path: &Path) -> PortfolioResult<Self> {
        tracing::debug!("Loading catalog from {:?}", path);
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            "Loaded catalog with {} projects from {:?}",
            catalog.projects.len(),
            path
        );
        Ok(catalog)
    }

    /// Reject catalogs the page cannot meaningfully render.
    ///
    /// Controllers assume well-formed records, so malformed content must be
    /// caught here at the data boundary.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.projects.is_empty() {
            return Err(PortfolioError::InvalidCatalog(
                "catalog contains no projects".to_string(),
            ));
        }
        for (i, project) in self.projects.iter().enumerate() {
            if !project.is_well_formed() {
                return Err(PortfolioError::InvalidCatalog(format!(
                    "project {} has an empty title or description",
                    i
                )));
            }
        }
        Ok(())
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Abdellatif Hissoune".to_string(),
                monogram: "AH".to_string(),
                headline: "Développeur Full Stack Web".to_string(),
                tagline: "Passionné par la création d'applications web modernes et \
                          performantes avec les technologies les plus récentes."
                    .to_string(),
                about: vec![
                    "Je suis un développeur Full Stack passionné, actuellement étudiant à \
                     YouCode (UM6P) à Safi. J'ai une forte expérience dans le développement \
                     d'applications web complètes, de la conception à la mise en production."
                        .to_string(),
                    "Mon parcours comprend un stage chez Proxisoft SARL où j'ai travaillé sur \
                     des projets Back Office complexes utilisant Symfony, ainsi que le \
                     développement de plus de 40 projets personnels couvrant diverses \
                     technologies."
                        .to_string(),
                ],
                location: "Safi, Maroc".to_string(),
                email: "haissouneabdellatif749@gmail.com".to_string(),
                phone: "+212 690732817".to_string(),
                education: "YouCode (UM6P), Safi".to_string(),
                portrait_url: "/abdellatif-portrait.jpg".to_string(),
                github_url: "https://github.com/AbdellatifHissoune".to_string(),
                linkedin_url: "https://linkedin.com/in/abdellatif-hissoune".to_string(),
            },
            skill_groups: vec![
                SkillGroup {
                    name: "Front-End".to_string(),
                    skills: vec![
                        Skill::new("HTML", "html5"),
                        Skill::new("CSS", "css3"),
                        Skill::new("JavaScript", "javascript"),
                        Skill::new("React", "react"),
                        Skill::new("Angular", "angularjs"),
                        Skill::new("Tailwind", "tailwindcss"),
                        Skill::new("Bootstrap", "bootstrap"),
                    ],
                },
                SkillGroup {
                    name: "Back-End".to_string(),
                    skills: vec![
                        Skill::new("PHP", "php"),
                        Skill::new("Laravel", "laravel"),
                        Skill::new("Symfony", "symfony"),
                        Skill::new("Java", "java"),
                        Skill::new("Spring", "spring"),
                    ],
                },
                SkillGroup {
                    name: "Base de données & Outils".to_string(),
                    skills: vec![
                        Skill::new("MySQL", "mysql"),
                        Skill::new("PostgreSQL", "postgresql"),
                        Skill::new("MongoDB", "mongodb"),
                        Skill::new("Git", "git"),
                        Skill::new("Docker", "docker"),
                        Skill::new("Figma", "figma"),
                    ],
                },
            ],
            projects: builtin_projects(),
        }
    }
}

fn project(
    title: &str,
    description: &str,
    technologies: &[&str],
    logos: &[&str],
    requirements: &[&str],
) -> ProjectRecord {
    ProjectRecord {
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|s| s.to_string()).collect(),
        logos: logos.iter().map(|s| s.to_string()).collect(),
        requirements: requirements.iter().map(|s| s.to_string()).collect(),
    }
}

fn devicon(slug: &str) -> String {
    format!("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/{slug}/{slug}-original.svg")
}

fn builtin_projects() -> Vec<ProjectRecord> {
    let spring = devicon("spring");
    let mysql = devicon("mysql");
    let postgresql = devicon("postgresql");
    let docker = devicon("docker");
    let github = devicon("github");
    let php = devicon("php");
    let javascript = devicon("javascript");
    let tailwindcss = devicon("tailwindcss");
    let laravel = devicon("laravel");
    let symfony = devicon("symfony");
    let bootstrap = devicon("bootstrap");
    let angularjs = devicon("angularjs");
    let react = devicon("react");

    vec![
        project(
            "Al Baraka Digital V1 - Plateforme Bancaire Sécurisée",
            "Plateforme bancaire sécurisée avec JWT pour digitaliser les opérations \
             bancaires : dépôts, retraits, virements avec validation automatique selon montant.",
            &["Spring Boot", "JWT", "OAuth2", "MySQL", "Docker"],
            &[&spring, &mysql, &docker],
            &[
                "Authentification JWT stateless + OAuth2 pour agents bancaires",
                "Gestion des opérations : dépôts, retraits, virements",
                "Validation automatique pour montants ≤ 10 000 DH",
                "Upload justificatifs pour opérations > 10 000 DH",
                "Workflow de validation manuelle par agent",
                "Conteneurisation Docker complète",
            ],
        ),
        project(
            "Al Baraka Digital V2 - Banking Platform + AI",
            "Évolution avec validation intelligente par Spring AI, analyse automatique des \
             justificatifs, CI/CD et interface Thymeleaf sécurisée.",
            &[
                "Spring Boot",
                "Spring AI",
                "Thymeleaf",
                "PostgreSQL",
                "Docker",
                "GitHub Actions",
            ],
            &[&spring, &postgresql, &docker, &github],
            &[
                "Spring AI pour analyse intelligente des justificatifs",
                "Recommandations automatiques : APPROVE, REJECT, NEED_HUMAN_REVIEW",
                "Interface web sécurisée avec Thymeleaf + Remember-me",
                "Pipeline CI/CD avec GitHub Actions",
                "Traçabilité complète des opérations",
                "Architecture prête pour production",
            ],
        ),
        project(
            "SmartShop - API Gestion Commerciale B2B",
            "API REST backend pour distributeur B2B avec 650+ clients, système de fidélité, \
             commandes multi-produits et paiements fractionnés.",
            &["Spring Boot", "PostgreSQL", "MapStruct", "Lombok", "Swagger"],
            &[&spring, &postgresql],
            &[
                "Gestion clients avec niveaux de fidélité : BASIC → SILVER → GOLD → PLATINUM",
                "Commandes multi-produits avec vérification stock temps réel",
                "Remises automatiques selon fidélité et codes promo",
                "Calculs automatiques HT, TVA 20%, TTC",
                "Paiements fractionnés avec limite légale 20 000 DH",
                "Documentation Swagger complète",
            ],
        ),
        project(
            "Plateforme E-Learning",
            "Plateforme complète type Udemy permettant aux étudiants de suivre des cours en \
             ligne et aux enseignants de publier du contenu éducatif.",
            &["PHP", "MySQL", "JavaScript", "Tailwind CSS"],
            &[&php, &mysql, &javascript, &tailwindcss],
            &[
                "Authentification sécurisée pour étudiants et enseignants",
                "Système de gestion de cours avec vidéos et ressources",
                "Suivi de progression et quiz interactifs",
                "Interface d'administration complète",
            ],
        ),
        project(
            "Nostalgia - Enchères Culturelles",
            "Plateforme d'enchères en ligne pour objets culturels rares avec système \
             sécurisé, blog interactif et paiement PayPal.",
            &["Laravel", "PostgreSQL", "Tailwind CSS", "JavaScript"],
            &[&laravel, &postgresql, &tailwindcss, &javascript],
            &[
                "Système d'enchères en temps réel",
                "Intégration paiement PayPal sécurisé",
                "Blog interactif avec commentaires",
                "Gestion des objets culturels et historiques",
            ],
        ),
        project(
            "Tricol - Gestion de Commandes",
            "API REST pour la gestion complète des fournisseurs, produits, commandes avec \
             valorisation automatique et documentation Swagger.",
            &["Spring Boot", "Angular", "PostgreSQL"],
            &[&spring, &angularjs, &postgresql],
            &[
                "API REST avec documentation Swagger",
                "Gestion fournisseurs et produits",
                "Système de commandes avec valorisation",
                "Architecture microservices",
            ],
        ),
        project(
            "SEBUL Back Office",
            "Système interne pour gérer équipements, logistique, maintenance et équipes avec \
             interfaces administratives avancées.",
            &["Symfony", "MySQL", "Bootstrap", "JavaScript"],
            &[&symfony, &mysql, &bootstrap, &javascript],
            &[
                "Gestion d'équipements et logistique",
                "Système de maintenance préventive",
                "Gestion des équipes et planning",
                "Tableaux de bord administratifs",
            ],
        ),
        project(
            "E-Commerce Dashboard",
            "Tableau de bord complet pour la gestion d'une boutique en ligne avec \
             statistiques en temps réel et gestion des commandes.",
            &["React", "Laravel", "MySQL", "Tailwind CSS"],
            &[&react, &laravel, &mysql, &tailwindcss],
            &[
                "Statistiques en temps réel",
                "Gestion des produits et inventaire",
                "Système de commandes et paiements",
                "Analyses et rapports détaillés",
            ],
        ),
        project(
            "Gestion RH & Paie",
            "Application de gestion des ressources humaines avec système de paie, congés, \
             absences et évaluation des performances.",
            &["Spring Boot", "Angular", "PostgreSQL"],
            &[&spring, &angularjs, &postgresql],
            &[
                "Système de paie automatisé",
                "Gestion des congés et absences",
                "Évaluation des performances",
                "Rapports RH détaillés",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_validates() {
        let catalog = Catalog::builtin();
        catalog.validate().unwrap();
        assert_eq!(catalog.projects.len(), 9);
        assert_eq!(catalog.skill_groups.len(), 3);
    }

    #[test]
    fn test_builtin_json_roundtrip() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        let back = Catalog::from_json(&json).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn test_empty_project_list_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.projects.clear();
        assert!(matches!(
            catalog.validate(),
            Err(PortfolioError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.projects[0].title = String::new();
        assert!(matches!(
            catalog.validate(),
            Err(PortfolioError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(PortfolioError::CatalogParse(_))
        ));
    }
}

// src/taxonomy.rs
//! Curated technology ontology shared by the matcher and skill
//! categorization. One immutable asset; matching elsewhere is always
//! case-insensitive containment of a canonical name in a subject text.

use std::collections::{BTreeMap, HashSet};

/// Category name → ordered canonical technology names.
pub static TECHNOLOGY_TAXONOMY: &[(&str, &[&str])] = &[
    (
        "programming_languages",
        &[
            "JavaScript",
            "Python",
            "Java",
            "C++",
            "TypeScript",
            "Ruby",
            "PHP",
            "Swift",
            "Go",
            "Rust",
            "Kotlin",
            "Scala",
            "C#",
            "Dart",
            "Perl",
            "Haskell",
            "Elixir",
            "R",
            "Objective-C",
            "Shell",
            "Lua",
            "MATLAB",
            "Julia",
            "VB.NET",
            "Groovy",
        ],
    ),
    (
        "frameworks",
        &[
            "React",
            "Angular",
            "Vue.js",
            "Node.js",
            "Django",
            "Flask",
            "Spring",
            "Express",
            "Svelte",
            "Next.js",
            "Nuxt.js",
            "NestJS",
            "FastAPI",
            "Ruby on Rails",
            "ASP.NET",
            "Meteor",
            "Gatsby",
            "Remix",
            "Hapi.js",
            "Laravel",
            "Quasar",
            "Alpine.js",
            "Ember.js",
            "Symfony",
            "Backbone.js",
            "Phoenix",
            "Micronaut",
        ],
    ),
    (
        "databases",
        &[
            "SQL",
            "MongoDB",
            "PostgreSQL",
            "MySQL",
            "Oracle",
            "Redis",
            "Cassandra",
            "Firebase Realtime DB",
            "Firestore",
            "SQLite",
            "MariaDB",
            "CouchDB",
            "Neo4j",
            "DynamoDB",
            "InfluxDB",
            "Supabase",
            "DuckDB",
            "TimescaleDB",
            "ClickHouse",
            "GraphQL (Apollo/Hasura)",
            "RethinkDB",
        ],
    ),
    (
        "tools",
        &[
            "Git",
            "Docker",
            "Kubernetes",
            "AWS",
            "Azure",
            "GCP",
            "Jenkins",
            "Jira",
            "Terraform",
            "Ansible",
            "CircleCI",
            "Travis CI",
            "GitHub Actions",
            "Vercel",
            "Netlify",
            "Postman",
            "Webpack",
            "Babel",
            "ESLint",
            "Prettier",
            "Figma",
            "Grafana",
            "Prometheus",
            "Sentry",
            "New Relic",
            "Logstash",
            "ElasticSearch",
            "Kibana",
            "Storybook",
            "Ngrok",
            "Zabbix",
            "Cloudflare",
            "Nginx",
            "Apache",
            "PM2",
        ],
    ),
    (
        "cloud_platforms",
        &[
            "Amazon Web Services (AWS)",
            "Microsoft Azure",
            "Google Cloud Platform (GCP)",
            "IBM Cloud",
            "Oracle Cloud",
            "DigitalOcean",
            "Heroku",
            "Vercel",
            "Netlify",
            "Linode",
            "Render",
            "Cloudflare Pages",
        ],
    ),
    (
        "ai_ml_libraries",
        &[
            "TensorFlow",
            "PyTorch",
            "Keras",
            "Scikit-learn",
            "Pandas",
            "NumPy",
            "OpenCV",
            "XGBoost",
            "LightGBM",
            "spaCy",
            "NLTK",
            "Transformers (Hugging Face)",
            "FastAI",
            "Matplotlib",
            "Seaborn",
            "LangChain",
            "OpenAI API",
            "LLaMA",
            "YOLO",
            "Tesseract",
            "MediaPipe",
            "ONNX",
            "AutoML",
            "Stable Diffusion",
            "Diffusers",
        ],
    ),
    (
        "mobile_technologies",
        &[
            "Flutter",
            "React Native",
            "SwiftUI",
            "Kotlin Multiplatform",
            "Xamarin",
            "Ionic",
            "Cordova",
            "Jetpack Compose",
            "Expo",
            "NativeScript",
        ],
    ),
    (
        "devops",
        &[
            "Docker",
            "Kubernetes",
            "Helm",
            "Terraform",
            "Ansible",
            "Puppet",
            "Chef",
            "ArgoCD",
            "Prometheus",
            "Grafana",
            "ELK Stack",
            "New Relic",
            "Sentry",
            "Istio",
            "Linkerd",
            "Consul",
            "Vault",
            "OpenShift",
            "Nomad",
        ],
    ),
    (
        "testing_libraries",
        &[
            "Jest",
            "Mocha",
            "Chai",
            "Cypress",
            "Selenium",
            "Puppeteer",
            "Playwright",
            "JUnit",
            "TestNG",
            "RSpec",
            "NUnit",
            "Postman",
            "Supertest",
            "Vitest",
            "Storybook",
            "Enzyme",
            "React Testing Library",
            "Detox",
            "Appium",
        ],
    ),
    (
        "cms_platforms",
        &[
            "WordPress",
            "Drupal",
            "Joomla",
            "Ghost",
            "Strapi",
            "Sanity",
            "Contentful",
            "Directus",
            "Netlify CMS",
            "Payload",
            "DatoCMS",
            "Forestry",
        ],
    ),
    (
        "api_tools",
        &[
            "Postman",
            "Swagger",
            "Insomnia",
            "Apigee",
            "RapidAPI",
            "GraphQL",
            "gRPC",
            "REST Assured",
            "OpenAPI",
            "Hoppscotch",
            "Hasura",
            "Redoc",
        ],
    ),
];

/// The static ontology, category by category.
pub fn lookup() -> &'static [(&'static str, &'static [&'static str])] {
    TECHNOLOGY_TAXONOMY
}

/// Deduplicated union of all categories, preserving first-seen order.
/// (Docker, Prometheus, Postman and a few others appear in more than one
/// category.)
pub fn flatten() -> Vec<&'static str> {
    let mut seen = HashSet::new();
    let mut all = Vec::new();
    for (_, technologies) in TECHNOLOGY_TAXONOMY {
        for tech in *technologies {
            if seen.insert(*tech) {
                all.push(*tech);
            }
        }
    }
    all
}

/// Case-insensitive containment of a canonical name in a subject text.
///
/// Names match as contiguous substrings ("Ruby on Rails" spans words), but an
/// occurrence is only counted when it is not glued to surrounding
/// alphanumerics: "Java" must not fire inside "JavaScript", nor "R" inside
/// "React". `text_lower` must already be lowercased; the one lowercase pass
/// is shared across the whole taxonomy scan.
pub fn text_contains(text_lower: &str, technology: &str) -> bool {
    let needle = technology.to_lowercase();
    if needle.is_empty() {
        return false;
    }
    let first_alnum = needle.chars().next().map_or(false, |c| c.is_alphanumeric());
    let last_alnum = needle
        .chars()
        .next_back()
        .map_or(false, |c| c.is_alphanumeric());

    for (idx, _) in text_lower.match_indices(&needle) {
        let before_ok = !first_alnum
            || text_lower[..idx]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = !last_alnum
            || text_lower[idx + needle.len()..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

/// All taxonomy names present in a text, first-seen taxonomy order.
pub fn technologies_in(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    flatten()
        .into_iter()
        .filter(|tech| text_contains(&lower, tech))
        .collect()
}

/// Bucket a comma-separated skill list by exact (case-insensitive) equality
/// against taxonomy names. Categories with no hits are dropped.
pub fn categorize_skills(input_skills: &str) -> BTreeMap<String, Vec<String>> {
    let skills: Vec<String> = input_skills
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let mut result = BTreeMap::new();
    for (category, keywords) in TECHNOLOGY_TAXONOMY {
        let mut hits = Vec::new();
        for skill in &skills {
            if let Some(keyword) = keywords.iter().find(|k| k.to_lowercase() == *skill) {
                hits.push(keyword.to_string());
            }
        }
        if !hits.is_empty() {
            result.insert(category.to_string(), hits);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_has_all_categories() {
        assert_eq!(lookup().len(), 11);
        assert!(lookup().iter().any(|(c, _)| *c == "programming_languages"));
        assert!(lookup().iter().any(|(c, _)| *c == "api_tools"));
    }

    #[test]
    fn test_flatten_deduplicates_preserving_order() {
        let all = flatten();
        assert_eq!(all.iter().filter(|t| **t == "Docker").count(), 1);
        assert_eq!(all.iter().filter(|t| **t == "Postman").count(), 1);
        // JavaScript opens the first category, so it opens the union too.
        assert_eq!(all[0], "JavaScript");
    }

    #[test]
    fn test_text_contains_requires_boundaries() {
        let text = "expert in javascript and react".to_lowercase();
        assert!(text_contains(&text, "JavaScript"));
        assert!(text_contains(&text, "React"));
        assert!(!text_contains(&text, "Java"));
        assert!(!text_contains(&text, "R"));
    }

    #[test]
    fn test_text_contains_multiword_and_symbols() {
        let text = "ruby on rails, c++, node.js".to_lowercase();
        assert!(text_contains(&text, "Ruby on Rails"));
        assert!(text_contains(&text, "C++"));
        assert!(text_contains(&text, "Node.js"));
        assert!(text_contains(&text, "Ruby"));
    }

    #[test]
    fn test_text_contains_rejects_glued_occurrences() {
        assert!(!text_contains("gopher", "Go"));
        assert!(text_contains("written in go.", "Go"));
        assert!(!text_contains("", "Go"));
    }

    #[test]
    fn test_technologies_in_empty_text() {
        assert!(technologies_in("").is_empty());
    }

    #[test]
    fn test_categorize_skills_buckets_by_exact_name() {
        let result = categorize_skills("python, docker, made-up-skill, React");
        assert_eq!(
            result.get("programming_languages"),
            Some(&vec!["Python".to_string()])
        );
        assert_eq!(result.get("tools"), Some(&vec!["Docker".to_string()]));
        assert_eq!(result.get("devops"), Some(&vec!["Docker".to_string()]));
        assert_eq!(
            result.get("frameworks"),
            Some(&vec!["React".to_string()])
        );
        // Categories without hits are dropped entirely.
        assert!(!result.contains_key("cms_platforms"));
    }

    #[test]
    fn test_categorize_skills_empty_input() {
        assert!(categorize_skills("").is_empty());
        assert!(categorize_skills(" , ,").is_empty());
    }
}

//! Builtin catalog data: the role and technology dictionaries used for
//! hh.ru postings. Keyword phrases and skill terms are lowercase and are
//! matched against normalizer output verbatim; Russian entries are surface
//! or lemma forms, mixed the way real posting text needs them.

use crate::catalog::{CatalogConfig, JobCategoryConfig, SkillCategory, SkillGroupConfig};

/// Job categories in priority order: the narrowest, most specific roles
/// first, the broad catch-all roles last. Rank = position in this table.
const JOB_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "AI, ML & LLM",
        &[
            "ai",
            "artificial intelligence",
            "искусственный интеллект",
            "ml",
            "machine learning",
            "машинное обучение",
            "deep learning",
            "dl",
            "llm",
            "large language model",
            "nlp",
            "natural language processing",
            "computer vision",
            "cv",
            "vision",
            "нейросеть",
            "нейронная сеть",
            "transformer",
            "bert",
            "gpt",
            "rag",
            "prompt",
            "prompt engineering",
            "промпт",
            "генеративный",
            "generative ai",
            "fine-tuning",
            "обучение модели",
            "data labeling",
            "разметка данных",
            "ml engineer",
            "ai engineer",
            "mlops",
            "model deployment",
            "reinforcement learning",
            "rpa",
            "robotic process automation",
        ],
    ),
    (
        "Cybersecurity",
        &[
            "cybersecurity",
            "information security",
            "иб",
            "информационная безопасность",
            "pentest",
            "penetration testing",
            "пентестер",
            "ethical hacking",
            "red team",
            "blue team",
            "appsec",
            "application security",
            "soc",
            "siem",
            "reverse engineering",
            "реверс",
            "malware analysis",
            "threat hunting",
            "incident response",
            "cryptography",
            "шифрование",
            "firewall",
            "ids",
            "ips",
            "devsecops",
            "owasp",
            "vulnerability",
            "security analyst",
        ],
    ),
    (
        "Electronics & Hardware",
        &[
            "hardware engineer",
            "электроник",
            "электронщик",
            "радиоэлектрон",
            "схемотехник",
            "embedded",
            "embedded developer",
            "микроконтроллер",
            "stm32",
            "arduino",
            "fpga",
            "плис",
            "verilog",
            "vhdl",
            "sdr",
            "dsp",
            "pcb",
            "altium",
            "firmware",
            "iot",
            "интернет вещей",
            "robotics",
            "робототехника",
            "circuit design",
        ],
    ),
    (
        "Analytics & Data Science",
        &[
            "data analyst",
            "аналитик данных",
            "data scientist",
            "bi analyst",
            "business intelligence",
            "analytics",
            "аналитика",
            "sql",
            "excel",
            "power bi",
            "tableau",
            "big data",
            "hadoop",
            "spark",
            "etl",
            "data pipeline",
            "data engineer",
            "математик",
            "статистика",
            "forecasting",
            "a/b test",
            "product analyst",
        ],
    ),
    (
        "QA & Automation",
        &[
            "qa",
            "quality assurance",
            "тестировщик",
            "инженер по тестированию",
            "test engineer",
            "automation engineer",
            "manual qa",
            "manual testing",
            "автотест",
            "автоматизация тестирования",
            "тестирование",
            "functional testing",
            "regression testing",
            "smoke test",
            "нагрузочный",
            "load testing",
            "performance testing",
            "selenium",
            "cypress",
            "playwright",
            "pytest",
            "junit",
            "testng",
            "bdd",
            "tdd",
            "api testing",
            "postman",
            "qa lead",
            "test lead",
        ],
    ),
    (
        "Network & SysAdmin",
        &[
            "sysadmin",
            "system administrator",
            "системный администратор",
            "network engineer",
            "сетевой инженер",
            "network",
            "tcp/ip",
            "linux admin",
            "windows server",
            "active directory",
            "voip",
            "asterisk",
            "nginx",
            "apache",
            "docker",
            "kubernetes",
            "k8s",
            "devops",
            "cloud engineer",
            "aws",
            "azure",
            "gcp",
            "virtualization",
            "vmware",
            "zabbix",
            "monitoring",
            "infrastructure",
        ],
    ),
    (
        "Software Development",
        &[
            "developer",
            "разработчик",
            "программист",
            "software engineer",
            "backend",
            "frontend",
            "fullstack",
            "mobile developer",
            "android developer",
            "ios developer",
            "gamedev",
            "unity",
            "unreal",
            "web developer",
            "python developer",
            "java developer",
            "c#",
            ".net",
            "react developer",
            "microservices",
            "api development",
            "oop",
            "design patterns",
        ],
    ),
    (
        "Education & HR",
        &[
            "преподаватель",
            "учитель",
            "методист",
            "mentor",
            "наставник",
            "trainer",
            "обучение",
            "instructional designer",
            "recruiter",
            "it recruiter",
            "hr",
            "human resources",
            "talent acquisition",
            "hr business partner",
            "technical interviewer",
        ],
    ),
    (
        "Support & Management",
        &[
            "support engineer",
            "technical support",
            "поддержка",
            "helpdesk",
            "l1",
            "l2",
            "l3",
            "service desk",
            "сопровождение",
            "product manager",
            "project manager",
            "scrum master",
            "cto",
            "tech lead",
            "team lead",
            "delivery manager",
            "account manager",
            "business development",
        ],
    ),
];

const SKILL_GROUPS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Languages,
        &[
            "python",
            "java",
            "javascript",
            "typescript",
            "golang",
            "go",
            "c++",
            "c#",
            "f#",
            "objective-c",
            "php",
            "ruby",
            "kotlin",
            "swift",
            "scala",
            "groovy",
            "rust",
            "dart",
            "elixir",
            "haskell",
            "erlang",
            "bash",
            "shell",
            "powershell",
            "matlab",
            "r",
            "sas",
            "solidity",
            "vyper",
            "assembly",
            "vba",
            "cobol",
            "fortran",
            "js",
            "ts",
            "html",
            "css",
            "1c",
            "1с",
        ],
    ),
    (
        SkillCategory::Frameworks,
        &[
            "django",
            "flask",
            "fastapi",
            "aiohttp",
            "tornado",
            "celery",
            "pydantic",
            "sqlalchemy",
            "asyncio",
            "spring",
            "spring boot",
            "spring mvc",
            "hibernate",
            "jpa",
            "quarkus",
            "micronaut",
            "react",
            "react.js",
            "next.js",
            "vue",
            "vue.js",
            "nuxt",
            "angular",
            "angularjs",
            "svelte",
            "redux",
            "mobx",
            "zustand",
            "rxjs",
            "node.js",
            "nodejs",
            "node",
            "express",
            "nest.js",
            "koa",
            "jquery",
            "laravel",
            "symfony",
            "yii",
            "codeigniter",
            ".net",
            ".net core",
            "asp.net",
            "entity framework",
            "flutter",
            "react native",
            "android sdk",
            "ios sdk",
            "jetpack compose",
            "swiftui",
            "tensorflow",
            "pytorch",
            "keras",
            "scikit-learn",
            "scikit",
            "xgboost",
            "lightgbm",
            "pandas",
            "numpy",
            "opencv",
            "huggingface",
            "transformers",
            "graphql",
            "apollo",
            "grpc",
            "bootstrap",
            "tailwind",
            "material ui",
            "shiny",
            "ggplot2",
            "dplyr",
            "telegrambot",
            "bitrix",
            "bitrix24",
            "1c enterprise",
            "1с предприятие",
        ],
    ),
    (
        SkillCategory::Databases,
        &[
            "sql",
            "postgresql",
            "postgres",
            "mysql",
            "mariadb",
            "mongodb",
            "redis",
            "clickhouse",
            "elasticsearch",
            "oracle",
            "cassandra",
            "sqlite",
            "dynamodb",
            "neo4j",
            "timescaledb",
            "cockroachdb",
            "snowflake",
            "bigquery",
            "hadoop",
            "hive",
            "presto",
            "redshift",
            "influxdb",
        ],
    ),
    (
        SkillCategory::Infrastructure,
        &[
            "docker",
            "docker-compose",
            "kubernetes",
            "k8s",
            "helm",
            "ansible",
            "terraform",
            "pulumi",
            "jenkins",
            "gitlab ci",
            "gitlab ci/cd",
            "ci/cd",
            "github actions",
            "teamcity",
            "circleci",
            "aws",
            "amazon web services",
            "gcp",
            "google cloud",
            "azure",
            "microsoft azure",
            "digitalocean",
            "nginx",
            "apache",
            "traefik",
            "prometheus",
            "grafana",
            "vault",
            "consul",
            "istio",
            "linkerd",
            "cloudflare",
            "linux",
            "ubuntu",
            "debian",
            "centos",
            "http",
            "https",
            "dns",
            "tcp/ip",
            "websocket",
            "postfix",
        ],
    ),
    (
        SkillCategory::Tools,
        &[
            "pyright",
            "webdriver",
            "excel",
            "git",
            "github",
            "gitlab",
            "bitbucket",
            "jira",
            "confluence",
            "postman",
            "insomnia",
            "swagger",
            "openapi",
            "selenium",
            "playwright",
            "cypress",
            "pytest",
            "unittest",
            "jest",
            "mocha",
            "allure",
            "sonarqube",
            "kafka",
            "rabbitmq",
            "nats",
            "airflow",
            "luigi",
            "tableau",
            "power bi",
            "superset",
            "finebi",
            "figma",
            "webpack",
            "vite",
            "babel",
            "gradle",
            "maven",
            "npm",
            "yarn",
            "pnpm",
            "linux",
            "bash",
            "zsh",
            "notion",
        ],
    ),
    (
        SkillCategory::Methodologies,
        &[
            "agile",
            "scrum",
            "kanban",
            "tdd",
            "bdd",
            "ddd",
            "clean architecture",
            "microservices",
            "monolith",
            "event-driven",
            "cqrs",
            "rest",
            "rest api",
            "soap",
            "ci/cd",
            "devops",
            "oop",
            "solid",
        ],
    ),
    (
        SkillCategory::Security,
        &[
            "oauth",
            "oauth2",
            "jwt",
            "soap",
            "grpc",
            "saml",
            "openid",
            "xss",
            "csrf",
            "owasp",
            "penetration testing",
            "burp suite",
            "wireshark",
            "ssl",
            "tls",
            "agile",
            "scrum",
        ],
    ),
    (SkillCategory::DataEngineering, &["etl"]),
    (
        SkillCategory::IndustrialIt,
        &[
            "асутп",
            "scada",
            "plc",
            "плк",
            "modbus",
            "opc ua",
            "промышленная автоматизация",
            "hmi",
            "mes",
        ],
    ),
    (
        SkillCategory::BusinessAnalytics,
        &[
            "ctr",
            "roi",
            "romi",
            "cpl",
            "cac",
            "ltv",
            "conversion",
            "конверсия",
            "unit economics",
            "юнит-экономика",
            "churn rate",
            "retention",
        ],
    ),
    (
        SkillCategory::EngineeringSoftware,
        &[
            "solidworks",
            "fusion 360",
            "компас-3d",
            "autocad",
            "matlab",
            "simulink",
            "gazebo",
            "ansys",
        ],
    ),
    (
        SkillCategory::AiMl,
        &[
            "asr",
            "tts",
            "nlu",
            "nlp",
            "llm",
            "stt",
            "speech-to-text",
            "text-to-speech",
            "voice assistant",
            "голосовой ассистент",
        ],
    ),
];

pub(crate) fn builtin_config() -> CatalogConfig {
    let job_categories = JOB_CATEGORIES
        .iter()
        .enumerate()
        .map(|(rank, (name, keywords))| JobCategoryConfig {
            name: (*name).to_string(),
            rank: rank as u32,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        })
        .collect();

    let skill_groups = SKILL_GROUPS
        .iter()
        .map(|(category, terms)| SkillGroupConfig {
            category: *category,
            terms: terms.iter().map(|t| (*t).to_string()).collect(),
        })
        .collect();

    CatalogConfig {
        job_categories,
        skill_groups,
    }
}

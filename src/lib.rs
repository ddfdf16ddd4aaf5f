//! Suivi des compétences Bac Pro CIEL - backend.
//!
//! Service HTTP/JSON de suivi de la validation des compétences: gestion des
//! élèves, des évaluations et de leurs attributions, validations item par
//! item et synthèse du profil de maîtrise.
//!
//! # Architecture
//! - `config`: gestion de la configuration
//! - `entity`: entités SeaORM
//! - `errors`: gestion unifiée des erreurs
//! - `models`: modèles métier
//! - `routes`: couche de routage API
//! - `runtime`: cycle de vie du serveur
//! - `services`: logique métier
//! - `storage`: couche de persistance (SeaORM)
//! - `utils`: fonctions utilitaires

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;

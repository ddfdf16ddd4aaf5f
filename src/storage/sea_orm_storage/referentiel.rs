use super::SeaOrmStorage;
use crate::entity::prelude::{
    CompetenceActiveModel, Competences, ItemActiveModel, Items,
};
use crate::errors::{CompetencesError, Result};
use crate::models::referentiel::entities::{Competence, ItemDetail};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};
use std::collections::HashMap;

/// Référentiel Bac Pro CIEL: compétences C01..C11 et leurs items.
/// (code, libelle, [(code_item, sous_item, description)])
const REFERENTIEL: &[(&str, &str, &[(&str, &str, &str)])] = &[
    (
        "C01",
        "Communiquer en situation professionnelle (français/anglais)",
        &[
            (
                "C01.1",
                "Communication orale",
                "Présenter oralement une situation professionnelle, en français ou en anglais",
            ),
            (
                "C01.2",
                "Communication écrite",
                "Rédiger un compte rendu ou une documentation technique",
            ),
            (
                "C01.3",
                "Communication client",
                "Dialoguer avec un client ou un utilisateur pour cerner son besoin",
            ),
        ],
    ),
    (
        "C02",
        "Organiser une intervention",
        &[
            (
                "C02.1",
                "Préparation",
                "Préparer les équipements, outillages et documents nécessaires à l'intervention",
            ),
            (
                "C02.2",
                "Planification",
                "Planifier les étapes de l'intervention en tenant compte des contraintes",
            ),
        ],
    ),
    (
        "C03",
        "Analyser une structure matérielle et logicielle",
        &[
            (
                "C03.1",
                "Analyse matérielle",
                "Identifier les blocs fonctionnels d'une structure matérielle",
            ),
            (
                "C03.2",
                "Analyse logicielle",
                "Analyser l'organisation d'une structure logicielle",
            ),
            (
                "C03.3",
                "Documentation constructeur",
                "Exploiter les documentations et spécifications techniques",
            ),
        ],
    ),
    (
        "C04",
        "Installer les éléments d'un système électronique ou informatique",
        &[
            (
                "C04.1",
                "Installation matérielle",
                "Implanter et raccorder les éléments matériels du système",
            ),
            (
                "C04.2",
                "Installation logicielle",
                "Installer et configurer les logiciels et systèmes d'exploitation",
            ),
            (
                "C04.3",
                "Mise en service",
                "Mettre en service le système installé",
            ),
        ],
    ),
    (
        "C05",
        "Réaliser des maquettes et prototypes",
        &[
            (
                "C05.1",
                "Placement-routage",
                "Réaliser le placement et le routage d'une carte électronique",
            ),
            (
                "C05.2",
                "Assemblage",
                "Braser et assembler les composants d'un prototype",
            ),
        ],
    ),
    (
        "C06",
        "Valider la conformité d'une installation",
        &[
            (
                "C06.1",
                "Tests de conformité",
                "Réaliser les tests permettant de valider la conformité de l'installation",
            ),
            (
                "C06.2",
                "Procès-verbal",
                "Renseigner un cahier de recette ou un procès-verbal de conformité",
            ),
        ],
    ),
    (
        "C07",
        "Réaliser des mesurages et des tests",
        &[
            (
                "C07.1",
                "Mesurages",
                "Mettre en œuvre les appareils de mesure adaptés",
            ),
            (
                "C07.2",
                "Tests",
                "Exécuter une procédure de test et consigner les résultats",
            ),
            (
                "C07.3",
                "Interprétation",
                "Interpréter les résultats de mesure au regard des spécifications",
            ),
        ],
    ),
    (
        "C08",
        "Coder",
        &[
            (
                "C08.1",
                "Développement",
                "Développer un programme répondant à un cahier des charges",
            ),
            (
                "C08.2",
                "Tests unitaires",
                "Tester et corriger un programme",
            ),
            (
                "C08.3",
                "Versionnement",
                "Utiliser un gestionnaire de versions",
            ),
        ],
    ),
    (
        "C09",
        "Installer un réseau informatique",
        &[
            (
                "C09.1",
                "Câblage",
                "Réaliser le câblage et le raccordement d'un réseau",
            ),
            (
                "C09.2",
                "Configuration",
                "Configurer les équipements d'interconnexion et les services réseau",
            ),
        ],
    ),
    (
        "C10",
        "Exploiter un réseau informatique",
        &[
            (
                "C10.1",
                "Supervision",
                "Superviser le fonctionnement d'un réseau informatique",
            ),
            (
                "C10.2",
                "Cybersécurité",
                "Appliquer les règles de cybersécurité dans l'exploitation du réseau",
            ),
        ],
    ),
    (
        "C11",
        "Maintenir un système électronique ou réseau informatique",
        &[
            (
                "C11.1",
                "Diagnostic",
                "Établir un diagnostic à partir des symptômes constatés",
            ),
            (
                "C11.2",
                "Dépannage",
                "Remplacer ou réparer l'élément défaillant",
            ),
            (
                "C11.3",
                "Maintenance préventive",
                "Réaliser les opérations de maintenance préventive",
            ),
        ],
    ),
];

impl SeaOrmStorage {
    pub async fn list_competences_impl(&self) -> Result<Vec<Competence>> {
        let rows = Competences::find()
            .order_by_asc(crate::entity::competences::Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Liste des compétences échouée: {e}"
                ))
            })?;

        Ok(rows.into_iter().map(|m| m.into_competence()).collect())
    }

    /// Items joints à leur compétence, triés par code de compétence puis
    /// code d'item.
    pub async fn list_items_impl(&self) -> Result<Vec<ItemDetail>> {
        let rows = Items::find()
            .find_also_related(Competences)
            .order_by_asc(crate::entity::competences::Column::Code)
            .order_by_asc(crate::entity::items::Column::CodeItem)
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!("Liste des items échouée: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(item, competence)| {
                competence.map(|c| ItemDetail {
                    id: item.id,
                    competence_id: item.competence_id,
                    code_item: item.code_item,
                    sous_item: item.sous_item,
                    description: item.description,
                    competence_code: c.code,
                    competence_libelle: c.libelle,
                })
            })
            .collect())
    }

    pub async fn item_existe_impl(&self, item_id: i64) -> Result<bool> {
        let count = Items::find_by_id(item_id)
            .count(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!("Vérification item échouée: {e}"))
            })?;

        Ok(count > 0)
    }

    pub async fn count_competences_impl(&self) -> Result<u64> {
        Competences::find().count(&self.db).await.map_err(|e| {
            CompetencesError::database_operation(format!("Comptage des compétences échoué: {e}"))
        })
    }

    /// Insère le référentiel complet. Idempotent à l'échelle de l'appelant:
    /// ne s'exécute au démarrage que si la table est vide.
    pub async fn seed_referentiel_impl(&self) -> Result<()> {
        let mut competence_ids: HashMap<&str, i64> = HashMap::new();

        for (code, libelle, _) in REFERENTIEL {
            let model = CompetenceActiveModel {
                code: Set((*code).to_string()),
                libelle: Set((*libelle).to_string()),
                ..Default::default()
            };
            let inserted = model.insert(&self.db).await.map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Insertion de la compétence {code} échouée: {e}"
                ))
            })?;
            competence_ids.insert(code, inserted.id);
        }

        for (code, _, items) in REFERENTIEL {
            let competence_id = competence_ids[code];
            for (code_item, sous_item, description) in *items {
                let model = ItemActiveModel {
                    competence_id: Set(competence_id),
                    code_item: Set((*code_item).to_string()),
                    sous_item: Set(Some((*sous_item).to_string())),
                    description: Set(Some((*description).to_string())),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(|e| {
                    CompetencesError::database_operation(format!(
                        "Insertion de l'item {code_item} échouée: {e}"
                    ))
                })?;
            }
        }

        Ok(())
    }
}

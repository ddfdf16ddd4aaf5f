use super::SeaOrmStorage;
use crate::config::DatabaseConfig;
use crate::models::evaluations::requests::{
    AttribuerEvaluationRequest, CreateEvaluationRequest, UpdateEvaluationRequest,
};
use crate::models::referentiel::entities::ItemDetail;
use crate::models::utilisateurs::requests::{CreateUtilisateurRequest, UpdateUtilisateurRequest};
use crate::models::validations::requests::UpsertValidationRequest;

// Base en mémoire, une seule connexion pour qu'elle survive à tout le test.
async fn storage() -> SeaOrmStorage {
    let database = DatabaseConfig {
        url: ":memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    SeaOrmStorage::from_database_config(&database)
        .await
        .expect("stockage en mémoire")
}

fn eleve(nom: &str, prenom: &str, classe: Option<&str>) -> CreateUtilisateurRequest {
    CreateUtilisateurRequest {
        nom: nom.to_string(),
        prenom: prenom.to_string(),
        email: Some(format!(
            "{}.{}@bacpro-ciel.fr",
            prenom.to_lowercase(),
            nom.to_lowercase()
        )),
        classe: classe.map(str::to_string),
        specialite: None,
        date_naissance: None,
        date_entree_bac: None,
        date_certification: None,
    }
}

async fn seed(storage: &SeaOrmStorage) -> Vec<ItemDetail> {
    storage.seed_referentiel_impl().await.expect("seed");
    storage.list_items_impl().await.expect("items")
}

#[tokio::test]
async fn crud_utilisateur() {
    let storage = storage().await;

    let cree = storage
        .create_utilisateur_impl(eleve("Dupont", "Marie", Some("Première")))
        .await
        .expect("création");
    assert_eq!(cree.email, "marie.dupont@bacpro-ciel.fr");

    assert!(storage
        .email_existe_impl("marie.dupont@bacpro-ciel.fr")
        .await
        .expect("email"));
    assert!(!storage
        .email_existe_impl("absent@bacpro-ciel.fr")
        .await
        .expect("email"));

    // patch partiel: seule la classe change
    let maj = storage
        .update_utilisateur_impl(
            cree.id,
            UpdateUtilisateurRequest {
                classe: Some("Terminale".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("mise à jour")
        .expect("présent");
    assert_eq!(maj.nom, "Dupont");
    assert_eq!(maj.prenom, "Marie");
    assert_eq!(maj.classe.as_deref(), Some("Terminale"));

    assert!(storage.delete_utilisateur_impl(cree.id).await.expect("suppression"));
    assert!(!storage.delete_utilisateur_impl(cree.id).await.expect("déjà supprimé"));
}

#[tokio::test]
async fn creation_rejette_email_duplique() {
    let storage = storage().await;

    storage
        .create_utilisateur_impl(eleve("Dupont", "Marie", None))
        .await
        .expect("première création");

    let erreur = storage
        .create_utilisateur_impl(eleve("Dupont", "Marie", None))
        .await
        .expect_err("doublon refusé");
    assert_eq!(erreur.code(), "E006");
}

#[tokio::test]
async fn liste_utilisateurs_triee_nom_prenom() {
    let storage = storage().await;

    for (nom, prenom) in [("Martin", "Zoé"), ("Dupont", "Paul"), ("Dupont", "Alice")] {
        storage
            .create_utilisateur_impl(eleve(nom, prenom, None))
            .await
            .expect("création");
    }

    let liste = storage.list_utilisateurs_impl().await.expect("liste");
    let ordre: Vec<(String, String)> = liste
        .into_iter()
        .map(|u| (u.nom, u.prenom))
        .collect();
    assert_eq!(
        ordre,
        vec![
            ("Dupont".to_string(), "Alice".to_string()),
            ("Dupont".to_string(), "Paul".to_string()),
            ("Martin".to_string(), "Zoé".to_string()),
        ]
    );
}

#[tokio::test]
async fn referentiel_seme_et_trie() {
    let storage = storage().await;

    assert_eq!(storage.count_competences_impl().await.expect("comptage"), 0);
    let items = seed(&storage).await;
    assert!(storage.count_competences_impl().await.expect("comptage") >= 9);

    let competences = storage.list_competences_impl().await.expect("compétences");
    let codes: Vec<&str> = competences.iter().map(|c| c.code.as_str()).collect();
    let mut tries = codes.clone();
    tries.sort();
    assert_eq!(codes, tries);
    assert!(codes.contains(&"C08"));

    // items joints et triés par code de compétence puis code d'item
    assert!(!items.is_empty());
    for paire in items.windows(2) {
        let cle = |i: &ItemDetail| (i.competence_code.clone(), i.code_item.clone());
        assert!(cle(&paire[0]) <= cle(&paire[1]));
    }
    assert!(items.iter().all(|i| !i.competence_libelle.is_empty()));
}

#[tokio::test]
async fn creation_evaluation_sans_item_refusee() {
    let storage = storage().await;

    let erreur = storage
        .create_evaluation_impl(CreateEvaluationRequest {
            pole: "Réseau".to_string(),
            module: "M1".to_string(),
            contexte: None,
            items_ids: vec![],
        })
        .await
        .expect_err("liste vide refusée");
    assert_eq!(erreur.code(), "E004");

    // rien n'a été persisté
    assert!(storage.list_evaluations_impl().await.expect("liste").is_empty());
}

#[tokio::test]
async fn cycle_de_vie_evaluation() {
    let storage = storage().await;
    let items = seed(&storage).await;

    let evaluation = storage
        .create_evaluation_impl(CreateEvaluationRequest {
            pole: "Électronique".to_string(),
            module: "Prototype".to_string(),
            contexte: Some("TP carte fille".to_string()),
            items_ids: vec![items[0].id, items[1].id],
        })
        .await
        .expect("création");

    let liste = storage.list_evaluations_impl().await.expect("liste");
    assert_eq!(liste.len(), 1);
    assert_eq!(liste[0].nombre_items, 2);

    let detail = storage
        .get_evaluation_detail_impl(evaluation.id)
        .await
        .expect("détail")
        .expect("présent");
    assert_eq!(detail.items.len(), 2);

    // patch partiel: le pôle et le contexte restent
    let maj = storage
        .update_evaluation_impl(UpdateEvaluationRequest {
            evaluation_id: evaluation.id,
            module: Some("Prototype v2".to_string()),
            contexte: None,
        })
        .await
        .expect("mise à jour")
        .expect("présente");
    assert_eq!(maj.module, "Prototype v2");
    assert_eq!(maj.contexte.as_deref(), Some("TP carte fille"));

    assert!(storage.delete_evaluation_impl(evaluation.id).await.expect("suppression"));
    assert!(storage
        .get_evaluation_detail_impl(evaluation.id)
        .await
        .expect("détail")
        .is_none());
}

#[tokio::test]
async fn ajouter_items_ignore_les_doublons() {
    let storage = storage().await;
    let items = seed(&storage).await;

    let evaluation = storage
        .create_evaluation_impl(CreateEvaluationRequest {
            pole: "Réseau".to_string(),
            module: "M2".to_string(),
            contexte: None,
            items_ids: vec![items[0].id],
        })
        .await
        .expect("création");

    storage
        .ajouter_items_evaluation_impl(evaluation.id, &[items[0].id, items[1].id, items[2].id])
        .await
        .expect("ajout");

    let detail = storage
        .get_evaluation_detail_impl(evaluation.id)
        .await
        .expect("détail")
        .expect("présent");
    assert_eq!(detail.items.len(), 3);
}

#[tokio::test]
async fn retirer_item_supprime_ses_validations_seulement() {
    let storage = storage().await;
    let items = seed(&storage).await;

    let eleve_cree = storage
        .create_utilisateur_impl(eleve("Durand", "Luc", Some("Terminale")))
        .await
        .expect("élève");
    let evaluation = storage
        .create_evaluation_impl(CreateEvaluationRequest {
            pole: "Réseau".to_string(),
            module: "M3".to_string(),
            contexte: None,
            items_ids: vec![items[0].id, items[1].id],
        })
        .await
        .expect("évaluation");

    for item_id in [items[0].id, items[1].id] {
        storage
            .upsert_validation_impl(UpsertValidationRequest {
                utilisateur_id: eleve_cree.id,
                evaluation_id: evaluation.id,
                item_id,
                niveau_validation: 3,
                commentaire: None,
                validateur: None,
            })
            .await
            .expect("validation");
    }

    assert!(storage
        .retirer_item_evaluation_impl(evaluation.id, items[0].id)
        .await
        .expect("retrait"));

    let restantes = storage
        .list_validations_utilisateur_impl(eleve_cree.id, Some(evaluation.id))
        .await
        .expect("validations");
    assert_eq!(restantes.len(), 1);
    assert_eq!(restantes[0].validation.item_id, items[1].id);

    // item non rattaché: rien à retirer
    assert!(!storage
        .retirer_item_evaluation_impl(evaluation.id, items[0].id)
        .await
        .expect("déjà retiré"));
}

#[tokio::test]
async fn attribution_exclusivite_et_doublon() {
    let storage = storage().await;
    let items = seed(&storage).await;

    let eleve_cree = storage
        .create_utilisateur_impl(eleve("Petit", "Emma", Some("Première")))
        .await
        .expect("élève");
    let evaluation = storage
        .create_evaluation_impl(CreateEvaluationRequest {
            pole: "Réseau".to_string(),
            module: "M4".to_string(),
            contexte: None,
            items_ids: vec![items[0].id],
        })
        .await
        .expect("évaluation");

    // les deux cibles à la fois: refusé
    let erreur = storage
        .attribuer_evaluation_impl(AttribuerEvaluationRequest {
            evaluation_id: evaluation.id,
            classe: Some("Première".to_string()),
            utilisateur_id: Some(eleve_cree.id),
        })
        .await
        .expect_err("exclusivité");
    assert_eq!(erreur.code(), "E004");

    // aucune cible: refusé aussi
    let erreur = storage
        .attribuer_evaluation_impl(AttribuerEvaluationRequest {
            evaluation_id: evaluation.id,
            classe: None,
            utilisateur_id: None,
        })
        .await
        .expect_err("cible requise");
    assert_eq!(erreur.code(), "E004");

    storage
        .attribuer_evaluation_impl(AttribuerEvaluationRequest {
            evaluation_id: evaluation.id,
            classe: Some("Première".to_string()),
            utilisateur_id: None,
        })
        .await
        .expect("attribution classe");

    // même attribution une seconde fois: conflit
    let erreur = storage
        .attribuer_evaluation_impl(AttribuerEvaluationRequest {
            evaluation_id: evaluation.id,
            classe: Some("Première".to_string()),
            utilisateur_id: None,
        })
        .await
        .expect_err("doublon");
    assert_eq!(erreur.code(), "E006");
}

#[tokio::test]
async fn utilisateurs_concernes_union_classe_et_cibles() {
    let storage = storage().await;
    let items = seed(&storage).await;

    let en_premiere = storage
        .create_utilisateur_impl(eleve("Roux", "Léa", Some("Première")))
        .await
        .expect("élève");
    let cible_directe = storage
        .create_utilisateur_impl(eleve("Blanc", "Tom", Some("Terminale")))
        .await
        .expect("élève");
    storage
        .create_utilisateur_impl(eleve("Noir", "Max", Some("Seconde")))
        .await
        .expect("élève hors périmètre");

    let evaluation = storage
        .create_evaluation_impl(CreateEvaluationRequest {
            pole: "Réseau".to_string(),
            module: "M5".to_string(),
            contexte: None,
            items_ids: vec![items[0].id],
        })
        .await
        .expect("évaluation");

    storage
        .attribuer_evaluation_impl(AttribuerEvaluationRequest {
            evaluation_id: evaluation.id,
            classe: Some("Première".to_string()),
            utilisateur_id: None,
        })
        .await
        .expect("attribution classe");
    storage
        .attribuer_evaluation_impl(AttribuerEvaluationRequest {
            evaluation_id: evaluation.id,
            classe: None,
            utilisateur_id: Some(cible_directe.id),
        })
        .await
        .expect("attribution élève");

    let concernes = storage
        .list_utilisateurs_concernes_impl(evaluation.id)
        .await
        .expect("concernés");
    let ids: Vec<i64> = concernes.iter().map(|u| u.id).collect();
    assert_eq!(concernes.len(), 2);
    assert!(ids.contains(&en_premiere.id));
    assert!(ids.contains(&cible_directe.id));
    // tri nom/prénom
    assert_eq!(concernes[0].nom, "Blanc");

    let attributions = storage
        .list_attributions_impl(evaluation.id)
        .await
        .expect("attributions");
    assert_eq!(attributions.len(), 2);
    let individuelle = attributions
        .iter()
        .find(|a| a.attribution.utilisateur_id.is_some())
        .expect("attribution individuelle");
    assert_eq!(individuelle.nom.as_deref(), Some("Blanc"));
}

#[tokio::test]
async fn upsert_validation_idempotent() {
    let storage = storage().await;
    let items = seed(&storage).await;

    let eleve_cree = storage
        .create_utilisateur_impl(eleve("Morel", "Inès", Some("Terminale")))
        .await
        .expect("élève");
    let evaluation = storage
        .create_evaluation_impl(CreateEvaluationRequest {
            pole: "Réseau".to_string(),
            module: "M6".to_string(),
            contexte: None,
            items_ids: vec![items[0].id],
        })
        .await
        .expect("évaluation");

    let (premiere, creee) = storage
        .upsert_validation_impl(UpsertValidationRequest {
            utilisateur_id: eleve_cree.id,
            evaluation_id: evaluation.id,
            item_id: items[0].id,
            niveau_validation: 2,
            commentaire: Some("premier passage".to_string()),
            validateur: None,
        })
        .await
        .expect("création");
    assert!(creee);
    assert_eq!(premiere.validateur.as_deref(), Some("Enseignant"));

    let (seconde, creee) = storage
        .upsert_validation_impl(UpsertValidationRequest {
            utilisateur_id: eleve_cree.id,
            evaluation_id: evaluation.id,
            item_id: items[0].id,
            niveau_validation: 4,
            commentaire: None,
            validateur: Some("M. Bernard".to_string()),
        })
        .await
        .expect("mise à jour");
    assert!(!creee);
    assert_eq!(seconde.id, premiere.id);
    assert_eq!(seconde.niveau_validation, 4);
    assert_eq!(seconde.validateur.as_deref(), Some("M. Bernard"));

    // une seule ligne au total
    let toutes = storage
        .list_validations_utilisateur_impl(eleve_cree.id, None)
        .await
        .expect("liste");
    assert_eq!(toutes.len(), 1);
}

#[tokio::test]
async fn upsert_validation_rejette_niveau_hors_plage() {
    let storage = storage().await;
    let items = seed(&storage).await;

    let eleve_cree = storage
        .create_utilisateur_impl(eleve("Faure", "Hugo", None))
        .await
        .expect("élève");
    let evaluation = storage
        .create_evaluation_impl(CreateEvaluationRequest {
            pole: "Réseau".to_string(),
            module: "M7".to_string(),
            contexte: None,
            items_ids: vec![items[0].id],
        })
        .await
        .expect("évaluation");

    for niveau in [-1, 5] {
        let erreur = storage
            .upsert_validation_impl(UpsertValidationRequest {
                utilisateur_id: eleve_cree.id,
                evaluation_id: evaluation.id,
                item_id: items[0].id,
                niveau_validation: niveau,
                commentaire: None,
                validateur: None,
            })
            .await
            .expect_err("niveau hors plage");
        assert_eq!(erreur.code(), "E004");
    }
}

#[tokio::test]
async fn profil_statuts_et_compteurs() {
    let storage = storage().await;
    let items = seed(&storage).await;

    let eleve_cree = storage
        .create_utilisateur_impl(eleve("Garnier", "Eva", Some("Première")))
        .await
        .expect("élève");

    // items de la première compétence (C01, 3 items au référentiel)
    let premiere_competence = items[0].competence_id;
    let items_c1: Vec<&ItemDetail> = items
        .iter()
        .filter(|i| i.competence_id == premiere_competence)
        .collect();
    assert!(items_c1.len() >= 3);

    let evaluation = storage
        .create_evaluation_impl(CreateEvaluationRequest {
            pole: "Étude".to_string(),
            module: "M8".to_string(),
            contexte: None,
            items_ids: items_c1.iter().map(|i| i.id).collect(),
        })
        .await
        .expect("évaluation");
    storage
        .attribuer_evaluation_impl(AttribuerEvaluationRequest {
            evaluation_id: evaluation.id,
            classe: Some("Première".to_string()),
            utilisateur_id: None,
        })
        .await
        .expect("attribution");

    // 3 validations à 4 => somme 12, moyenne 4.0 => Maîtrisé
    for item in &items_c1[..3] {
        storage
            .upsert_validation_impl(UpsertValidationRequest {
                utilisateur_id: eleve_cree.id,
                evaluation_id: evaluation.id,
                item_id: item.id,
                niveau_validation: 4,
                commentaire: None,
                validateur: None,
            })
            .await
            .expect("validation");
    }

    let profil = storage
        .get_profil_utilisateur_impl(eleve_cree.id)
        .await
        .expect("profil")
        .expect("présent");

    let c1 = profil
        .competences
        .iter()
        .find(|c| c.competence_id == premiere_competence)
        .expect("ligne C01");
    assert_eq!(c1.nb_validations, 3);
    assert_eq!(c1.total_niveaux, 12);
    assert_eq!(c1.niveau_moyen, 4.0);
    assert_eq!(c1.statut, "Maîtrisé");
    assert_eq!(c1.statut_class, "status-mastered");
    assert_eq!(c1.nb_eval_premiere, 1);
    assert_eq!(c1.nb_eval_terminale, 0);

    // les compétences sans validation restent "Non évalué"
    let non_evaluee = profil
        .competences
        .iter()
        .find(|c| c.competence_id != premiere_competence)
        .expect("autre compétence");
    assert_eq!(non_evaluee.statut, "Non évalué");
    assert_eq!(non_evaluee.nb_validations, 0);

    // tri par code
    for paire in profil.competences.windows(2) {
        assert!(paire[0].competence_code <= paire[1].competence_code);
    }

    // élève inconnu: pas de profil
    assert!(storage
        .get_profil_utilisateur_impl(999_999)
        .await
        .expect("profil")
        .is_none());
}

#[tokio::test]
async fn suppression_eleve_cascade_validations() {
    let storage = storage().await;
    let items = seed(&storage).await;

    let eleve_cree = storage
        .create_utilisateur_impl(eleve("Chevalier", "Nina", Some("Terminale")))
        .await
        .expect("élève");
    let evaluation = storage
        .create_evaluation_impl(CreateEvaluationRequest {
            pole: "Réseau".to_string(),
            module: "M9".to_string(),
            contexte: None,
            items_ids: vec![items[0].id],
        })
        .await
        .expect("évaluation");
    storage
        .upsert_validation_impl(UpsertValidationRequest {
            utilisateur_id: eleve_cree.id,
            evaluation_id: evaluation.id,
            item_id: items[0].id,
            niveau_validation: 1,
            commentaire: None,
            validateur: None,
        })
        .await
        .expect("validation");

    assert!(storage.delete_utilisateur_impl(eleve_cree.id).await.expect("suppression"));

    let restantes = storage
        .list_validations_evaluation_impl(evaluation.id)
        .await
        .expect("validations");
    assert!(restantes.is_empty());
}

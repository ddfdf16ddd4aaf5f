//! Import d'élèves depuis un tableur (xlsx, xls ou csv).
//!
//! Les colonnes sont reconnues par listes de synonymes; chaque ligne en
//! erreur est signalée sans interrompre le reste de l'import.

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use calamine::Reader;
use chrono::{Datelike, NaiveDate};
use futures_util::StreamExt;
use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use tracing::{error, info};

use super::UtilisateurService;
use crate::config::{AppConfig, UploadConfig};
use crate::models::utilisateurs::requests::CreateUtilisateurRequest;
use crate::models::utilisateurs::responses::{
    ImportExcelErrorResponse, ImportExcelResponse, UtilisateurImporte,
};
use crate::storage::Storage;
use crate::utils::naming::{derive_email, title_case};

const SYNONYMES_NOM: &[&str] = &["nom", "name", "lastname"];
const SYNONYMES_PRENOM: &[&str] = &["prenom", "prénom", "firstname", "prename"];
const SYNONYMES_EMAIL: &[&str] = &["email", "mail", "courriel"];
const SYNONYMES_CLASSE: &[&str] = &["classe", "class", "niveau", "level"];
const SYNONYMES_DATE_NAISSANCE: &[&str] = &["date_naissance", "date naissance", "birthdate", "dn"];
const SYNONYMES_DATE_ENTREE_BAC: &[&str] = &[
    "date_entree_bac",
    "date entree bac",
    "entree_bac",
    "debut_bac",
    "annee_entree",
];
const SYNONYMES_DATE_CERTIFICATION: &[&str] = &[
    "date_certification",
    "date certification",
    "certification",
    "fin_bac",
    "annee_certification",
];
const SYNONYMES_SPECIALITE: &[&str] = &["specialite", "spécialité", "option", "speciality"];

const FORMATS_DATE: &[&str] = &[
    "%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d", "%d/%m/%y", "%d-%m-%y", "%d %m %Y", "%d %b %Y",
];

/// Tableur aplati: en-têtes normalisés (minuscules, sans espaces de bord)
/// et lignes de cellules textuelles.
struct TableImport {
    colonnes: Vec<String>,
    lignes: Vec<Vec<String>>,
}

enum ErreurImport {
    Lecture(String),
    ColonnesManquantes(Vec<String>, Vec<String>),
}

pub async fn import_excel(
    service: &UtilisateurService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();

    let (file_bytes, file_name) = match read_file_from_multipart(&mut payload).await {
        Ok(result) => result,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ImportExcelErrorResponse {
                success: false,
                erreur: format!("Lecture du fichier échouée: {e}"),
                colonnes_detectees: None,
            }));
        }
    };

    let extension = file_name.rsplit('.').next().unwrap_or("").to_lowercase();
    if let Err(erreur) = verifier_fichier(&extension, file_bytes.len(), &config.upload) {
        return Ok(HttpResponse::BadRequest().json(ImportExcelErrorResponse {
            success: false,
            erreur,
            colonnes_detectees: None,
        }));
    }

    let table = if extension == "csv" {
        parse_csv(&file_bytes)
    } else {
        parse_classeur(&file_bytes)
    };
    let table = match table.and_then(verifier_colonnes_requises) {
        Ok(table) => table,
        Err(ErreurImport::Lecture(msg)) => {
            return Ok(HttpResponse::BadRequest().json(ImportExcelErrorResponse {
                success: false,
                erreur: msg,
                colonnes_detectees: None,
            }));
        }
        Err(ErreurImport::ColonnesManquantes(manquantes, detectees)) => {
            return Ok(HttpResponse::BadRequest().json(ImportExcelErrorResponse {
                success: false,
                erreur: format!("Colonnes manquantes: {}", manquantes.join(", ")),
                colonnes_detectees: Some(detectees),
            }));
        }
    };

    Ok(HttpResponse::Ok().json(importer_table(storage.as_ref(), table).await))
}

/// Contrôles structurels sur le fichier reçu, avant tout parsing.
fn verifier_fichier(extension: &str, taille: usize, upload: &UploadConfig) -> Result<(), String> {
    if !upload.allowed_extensions.iter().any(|e| e == extension) {
        return Err(format!(
            "Extension .{extension} non supportée (attendu: {})",
            upload.allowed_extensions.join(", ")
        ));
    }
    if taille == 0 {
        return Err("Fichier vide".to_string());
    }
    if taille > upload.max_size {
        return Err(format!(
            "Fichier trop volumineux ({taille} octets, maximum {})",
            upload.max_size
        ));
    }
    Ok(())
}

/// Réconciliation ligne à ligne: chaque ligne en erreur est signalée, les
/// autres sont insérées.
async fn importer_table(storage: &dyn Storage, table: TableImport) -> ImportExcelResponse {
    let index: HashMap<&str, usize> = table
        .colonnes
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), i))
        .collect();

    let total_lignes = table.lignes.len();
    let mut utilisateurs_importes: Vec<UtilisateurImporte> = Vec::new();
    let mut erreurs: Vec<String> = Vec::new();
    let mut emails_du_lot: HashSet<String> = HashSet::new();

    for (i, ligne) in table.lignes.iter().enumerate() {
        // ligne 1 = en-têtes, les données commencent ligne 2
        let numero = i + 2;

        let nom = extraire_valeur(&index, ligne, SYNONYMES_NOM);
        let prenom = extraire_valeur(&index, ligne, SYNONYMES_PRENOM);
        let (Some(nom), Some(prenom)) = (nom, prenom) else {
            erreurs.push(format!("Ligne {numero}: Nom et prénom sont obligatoires"));
            continue;
        };

        let nom = title_case(nom.trim());
        let prenom = title_case(prenom.trim());
        let email = match extraire_valeur(&index, ligne, SYNONYMES_EMAIL) {
            Some(email) => email.trim().to_lowercase(),
            None => derive_email(&prenom, &nom),
        };

        if emails_du_lot.contains(&email) {
            erreurs.push(format!(
                "Ligne {numero}: L'email {email} est en double dans le fichier"
            ));
            continue;
        }
        match storage.email_existe(&email).await {
            Ok(true) => {
                erreurs.push(format!("Ligne {numero}: L'email {email} existe déjà"));
                continue;
            }
            Ok(false) => {}
            Err(e) => {
                erreurs.push(format!("Ligne {numero}: {e}"));
                continue;
            }
        }

        let req = CreateUtilisateurRequest {
            nom,
            prenom,
            email: Some(email.clone()),
            classe: extraire_valeur(&index, ligne, SYNONYMES_CLASSE),
            specialite: extraire_valeur(&index, ligne, SYNONYMES_SPECIALITE),
            date_naissance: extraire_date(&index, ligne, SYNONYMES_DATE_NAISSANCE),
            date_entree_bac: extraire_annee(&index, ligne, SYNONYMES_DATE_ENTREE_BAC),
            date_certification: extraire_annee(&index, ligne, SYNONYMES_DATE_CERTIFICATION),
        };

        match storage.create_utilisateur(req).await {
            Ok(utilisateur) => {
                emails_du_lot.insert(email);
                utilisateurs_importes.push(utilisateur.into());
            }
            Err(e) => {
                error!("Import ligne {numero} échoué: {e}");
                erreurs.push(format!("Ligne {numero}: {e}"));
            }
        }
    }

    info!(
        "Import terminé: {} élèves importés, {} erreurs sur {} lignes",
        utilisateurs_importes.len(),
        erreurs.len(),
        total_lignes
    );

    ImportExcelResponse {
        success: true,
        total_importes: utilisateurs_importes.len(),
        utilisateurs_importes,
        erreurs,
        total_lignes,
    }
}

async fn read_file_from_multipart(payload: &mut Multipart) -> Result<(Vec<u8>, String), String> {
    let mut file_bytes = Vec::new();
    let mut file_name = String::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| format!("Lecture du champ échouée: {e}"))?;

        if field.name().map(|n| n == "file").unwrap_or(false) {
            if let Some(content_disposition) = field.content_disposition() {
                file_name = content_disposition
                    .get_filename()
                    .unwrap_or("upload.xlsx")
                    .to_string();
            }

            while let Some(chunk) = field.next().await {
                let data = chunk.map_err(|e| format!("Lecture des données échouée: {e}"))?;
                file_bytes.extend_from_slice(&data);
            }
        }
    }

    if file_bytes.is_empty() {
        return Err("Champ 'file' absent de la requête".to_string());
    }

    Ok((file_bytes, file_name))
}

/// Les colonnes `nom` et `prenom` doivent exister telles quelles; les
/// synonymes ne jouent que pour l'extraction des valeurs.
fn verifier_colonnes_requises(table: TableImport) -> Result<TableImport, ErreurImport> {
    let manquantes: Vec<String> = ["nom", "prenom"]
        .iter()
        .filter(|c| !table.colonnes.iter().any(|col| col == *c))
        .map(|c| (*c).to_string())
        .collect();

    if manquantes.is_empty() {
        Ok(table)
    } else {
        Err(ErreurImport::ColonnesManquantes(
            manquantes,
            table.colonnes,
        ))
    }
}

fn parse_csv(data: &[u8]) -> Result<TableImport, ErreurImport> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(data));

    let colonnes: Vec<String> = rdr
        .headers()
        .map_err(|e| ErreurImport::Lecture(format!("Lecture des en-têtes échouée: {e}")))?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let mut lignes = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result
            .map_err(|e| ErreurImport::Lecture(format!("Ligne {}: lecture échouée: {e}", i + 2)))?;
        lignes.push(record.iter().map(|c| c.trim().to_string()).collect());
    }

    Ok(TableImport { colonnes, lignes })
}

fn parse_classeur(data: &[u8]) -> Result<TableImport, ErreurImport> {
    let cursor = Cursor::new(data.to_vec());
    let mut classeur = calamine::open_workbook_auto_from_rs(cursor)
        .map_err(|e| ErreurImport::Lecture(format!("Ouverture du classeur échouée: {e}")))?;

    let feuilles = classeur.sheet_names().to_vec();
    let premiere = feuilles
        .first()
        .ok_or_else(|| ErreurImport::Lecture("Classeur sans feuille".to_string()))?;

    let plage = classeur
        .worksheet_range(premiere)
        .map_err(|e| ErreurImport::Lecture(format!("Lecture de la feuille échouée: {e}")))?;

    let mut rangees = plage.rows();
    let colonnes: Vec<String> = rangees
        .next()
        .ok_or_else(|| ErreurImport::Lecture("Feuille vide".to_string()))?
        .iter()
        .map(|c| c.to_string().trim().to_lowercase())
        .collect();

    let lignes = rangees
        .map(|rangee| {
            rangee
                .iter()
                .map(|c| c.to_string().trim().to_string())
                .collect()
        })
        .collect();

    Ok(TableImport { colonnes, lignes })
}

/// Première colonne synonyme présente et non vide.
fn extraire_valeur(
    index: &HashMap<&str, usize>,
    ligne: &[String],
    synonymes: &[&str],
) -> Option<String> {
    for nom in synonymes {
        if let Some(&i) = index.get(nom)
            && let Some(valeur) = ligne.get(i)
        {
            let valeur = valeur.trim();
            if !valeur.is_empty() {
                return Some(valeur.to_string());
            }
        }
    }
    None
}

fn extraire_date(
    index: &HashMap<&str, usize>,
    ligne: &[String],
    synonymes: &[&str],
) -> Option<NaiveDate> {
    let valeur = extraire_valeur(index, ligne, synonymes)?;
    parser_date(&valeur)
}

fn parser_date(valeur: &str) -> Option<NaiveDate> {
    FORMATS_DATE
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(valeur, fmt).ok())
}

/// Année depuis un entier, un flottant (cellules numériques de tableur) ou
/// une date dont on ne garde que l'année.
fn extraire_annee(
    index: &HashMap<&str, usize>,
    ligne: &[String],
    synonymes: &[&str],
) -> Option<i32> {
    let valeur = extraire_valeur(index, ligne, synonymes)?;
    parser_annee(&valeur)
}

fn parser_annee(valeur: &str) -> Option<i32> {
    if let Ok(annee) = valeur.parse::<i32>() {
        return Some(annee);
    }
    if let Ok(flottant) = valeur.parse::<f64>() {
        return Some(flottant as i32);
    }
    parser_date(valeur).map(|d| d.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_de(colonnes: &[&str]) -> HashMap<&'static str, usize> {
        // les tests n'ont besoin que de clés 'static
        colonnes
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let statique: &'static str = Box::leak(c.to_string().into_boxed_str());
                (statique, i)
            })
            .collect()
    }

    #[test]
    fn synonymes_dans_l_ordre() {
        let index = index_de(&["lastname", "nom"]);
        let ligne = vec!["Smith".to_string(), "Dupont".to_string()];
        // "nom" est le premier synonyme, il gagne même si "lastname" existe
        assert_eq!(
            extraire_valeur(&index, &ligne, SYNONYMES_NOM),
            Some("Dupont".to_string())
        );
    }

    #[test]
    fn valeur_vide_ignoree() {
        let index = index_de(&["nom", "name"]);
        let ligne = vec!["  ".to_string(), "Smith".to_string()];
        assert_eq!(
            extraire_valeur(&index, &ligne, SYNONYMES_NOM),
            Some("Smith".to_string())
        );
    }

    #[test]
    fn formats_de_date() {
        let attendu = NaiveDate::from_ymd_opt(2006, 3, 15).unwrap();
        for valeur in ["2006-03-15", "15/03/2006", "15-03-2006", "2006/03/15"] {
            assert_eq!(parser_date(valeur), Some(attendu), "format: {valeur}");
        }
        assert_eq!(
            parser_date("15/03/06"),
            Some(NaiveDate::from_ymd_opt(2006, 3, 15).unwrap())
        );
        assert_eq!(parser_date("pas une date"), None);
    }

    #[test]
    fn annee_entier_flottant_ou_date() {
        assert_eq!(parser_annee("2024"), Some(2024));
        assert_eq!(parser_annee("2024.0"), Some(2024));
        assert_eq!(parser_annee("2024-09-01"), Some(2024));
        assert_eq!(parser_annee("bientôt"), None);
    }

    #[test]
    fn colonnes_requises_litterales() {
        let table = TableImport {
            colonnes: vec!["name".to_string(), "firstname".to_string()],
            lignes: vec![],
        };
        // les synonymes ne suffisent pas pour la vérification structurelle
        match verifier_colonnes_requises(table) {
            Err(ErreurImport::ColonnesManquantes(manquantes, _)) => {
                assert_eq!(manquantes, vec!["nom".to_string(), "prenom".to_string()]);
            }
            _ => panic!("colonnes manquantes attendues"),
        }
    }

    #[test]
    fn parse_csv_normalise_les_en_tetes() {
        let data = b"Nom , PRENOM,classe\nDupont,Marie,Premiere\n";
        let table = parse_csv(data).ok().expect("csv valide");
        assert_eq!(table.colonnes, vec!["nom", "prenom", "classe"]);
        assert_eq!(table.lignes.len(), 1);
        assert_eq!(table.lignes[0][0], "Dupont");
    }

    #[test]
    fn fichier_refuse_extension_taille_ou_vide() {
        let upload = UploadConfig {
            max_size: 16,
            allowed_extensions: vec!["xlsx".to_string(), "csv".to_string()],
        };
        assert!(verifier_fichier("csv", 10, &upload).is_ok());
        assert!(verifier_fichier("pdf", 10, &upload).is_err());
        assert!(verifier_fichier("csv", 0, &upload).is_err());
        assert!(
            verifier_fichier("csv", 17, &upload)
                .unwrap_err()
                .contains("volumineux")
        );
    }

    use crate::config::DatabaseConfig;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    async fn stockage() -> SeaOrmStorage {
        SeaOrmStorage::from_database_config(&DatabaseConfig {
            url: ":memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        })
        .await
        .expect("stockage en mémoire")
    }

    fn table_de(colonnes: &[&str], lignes: &[&[&str]]) -> TableImport {
        TableImport {
            colonnes: colonnes.iter().map(|c| c.to_string()).collect(),
            lignes: lignes
                .iter()
                .map(|l| l.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    #[tokio::test]
    async fn import_signale_la_ligne_sans_prenom_et_insere_les_autres() {
        let storage = stockage().await;
        let table = table_de(
            &["nom", "prenom", "email"],
            &[
                &["Dupont", "Marie", ""],
                &["Martin", "", ""],
                &["Durand", "Luc", "luc.durand@exemple.fr"],
            ],
        );

        let reponse = importer_table(&storage, table).await;

        assert_eq!(reponse.total_lignes, 3);
        assert_eq!(reponse.total_importes, 2);
        assert_eq!(reponse.erreurs.len(), 1);
        assert!(reponse.erreurs[0].starts_with("Ligne 3:"));
        // email dérivé quand la colonne est vide
        assert!(
            reponse
                .utilisateurs_importes
                .iter()
                .any(|u| u.email == "marie.dupont@bacpro-ciel.fr")
        );
    }

    #[tokio::test]
    async fn import_rejette_les_doublons_d_email() {
        let storage = stockage().await;
        storage
            .create_utilisateur(CreateUtilisateurRequest {
                nom: "Durand".to_string(),
                prenom: "Luc".to_string(),
                email: Some("luc.durand@bacpro-ciel.fr".to_string()),
                classe: None,
                specialite: None,
                date_naissance: None,
                date_entree_bac: None,
                date_certification: None,
            })
            .await
            .expect("élève existant");

        let table = table_de(
            &["nom", "prenom"],
            &[
                // même email dérivé deux fois dans le fichier
                &["Dupont", "Marie"],
                &["DUPONT", "marie"],
                // email dérivé déjà en base
                &["Durand", "Luc"],
            ],
        );

        let reponse = importer_table(&storage, table).await;

        assert_eq!(reponse.total_importes, 1);
        assert_eq!(reponse.erreurs.len(), 2);
        assert!(reponse.erreurs[0].contains("en double dans le fichier"));
        assert!(reponse.erreurs[1].contains("existe déjà"));
    }
}

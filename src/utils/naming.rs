//! Normalisation des identités élèves: casse des noms et dérivation
//! d'adresse institutionnelle.

const EMAIL_DOMAIN: &str = "bacpro-ciel.fr";

/// Met chaque mot en capitale initiale, le reste en minuscules.
/// Les séparateurs (espaces, tirets, apostrophes) démarrent un nouveau mot.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Adresse dérivée `prenom.nom@bacpro-ciel.fr`, en minuscules, espaces
/// remplacés par des points.
pub fn derive_email(prenom: &str, nom: &str) -> String {
    let local = format!("{}.{}", prenom.trim(), nom.trim())
        .to_lowercase()
        .replace(' ', ".");
    format!("{local}@{EMAIL_DOMAIN}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_simple() {
        assert_eq!(title_case("dupont"), "Dupont");
        assert_eq!(title_case("MARIE"), "Marie");
    }

    #[test]
    fn title_case_compose() {
        assert_eq!(title_case("jean-pierre"), "Jean-Pierre");
        assert_eq!(title_case("de la tour"), "De La Tour");
        assert_eq!(title_case("o'neil"), "O'Neil");
    }

    #[test]
    fn email_basique() {
        assert_eq!(derive_email("Marie", "Dupont"), "marie.dupont@bacpro-ciel.fr");
    }

    #[test]
    fn email_espaces_en_points() {
        assert_eq!(
            derive_email("Jean Pierre", "De La Tour"),
            "jean.pierre.de.la.tour@bacpro-ciel.fr"
        );
    }

    #[test]
    fn email_accents_conserves() {
        assert_eq!(derive_email("Éloïse", "Müller"), "éloïse.müller@bacpro-ciel.fr");
    }
}

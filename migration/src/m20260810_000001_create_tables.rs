use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Table des élèves
        manager
            .create_table(
                Table::create()
                    .table(Utilisateurs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Utilisateurs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Utilisateurs::Nom).string().not_null())
                    .col(ColumnDef::new(Utilisateurs::Prenom).string().not_null())
                    .col(
                        ColumnDef::new(Utilisateurs::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Utilisateurs::Classe).string().null())
                    .col(ColumnDef::new(Utilisateurs::Specialite).string().null())
                    .col(ColumnDef::new(Utilisateurs::DateNaissance).date().null())
                    .col(
                        ColumnDef::new(Utilisateurs::DateEntreeBac)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Utilisateurs::DateCertification)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Utilisateurs::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Utilisateurs::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Référentiel : compétences
        manager
            .create_table(
                Table::create()
                    .table(Competences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Competences::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Competences::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Competences::Libelle).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Référentiel : items rattachés à une compétence
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Items::CompetenceId).big_integer().not_null())
                    .col(ColumnDef::new(Items::CodeItem).string().not_null())
                    .col(ColumnDef::new(Items::SousItem).string().null())
                    .col(ColumnDef::new(Items::Description).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Items::Table, Items::CompetenceId)
                            .to(Competences::Table, Competences::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Évaluations créées par les enseignants
        manager
            .create_table(
                Table::create()
                    .table(Evaluations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Evaluations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Evaluations::Pole).string().not_null())
                    .col(ColumnDef::new(Evaluations::Module).string().not_null())
                    .col(ColumnDef::new(Evaluations::Contexte).text().null())
                    .col(
                        ColumnDef::new(Evaluations::DateCreation)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Association évaluation <-> items du référentiel
        manager
            .create_table(
                Table::create()
                    .table(EvaluationItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EvaluationItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EvaluationItems::EvaluationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationItems::ItemId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EvaluationItems::Table, EvaluationItems::EvaluationId)
                            .to(Evaluations::Table, Evaluations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EvaluationItems::Table, EvaluationItems::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_evaluation_items_unique")
                    .table(EvaluationItems::Table)
                    .col(EvaluationItems::EvaluationId)
                    .col(EvaluationItems::ItemId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Attribution d'une évaluation à une classe ou à un élève
        manager
            .create_table(
                Table::create()
                    .table(EvaluationAttributions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EvaluationAttributions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EvaluationAttributions::EvaluationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationAttributions::Classe)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationAttributions::UtilisateurId)
                            .big_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                EvaluationAttributions::Table,
                                EvaluationAttributions::EvaluationId,
                            )
                            .to(Evaluations::Table, Evaluations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                EvaluationAttributions::Table,
                                EvaluationAttributions::UtilisateurId,
                            )
                            .to(Utilisateurs::Table, Utilisateurs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Niveaux de validation par (élève, évaluation, item)
        manager
            .create_table(
                Table::create()
                    .table(Validations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Validations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Validations::UtilisateurId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Validations::EvaluationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Validations::ItemId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Validations::NiveauValidation)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Validations::Commentaire).text().null())
                    .col(ColumnDef::new(Validations::Validateur).string().null())
                    .col(
                        ColumnDef::new(Validations::DateValidation)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Validations::Table, Validations::UtilisateurId)
                            .to(Utilisateurs::Table, Utilisateurs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Validations::Table, Validations::EvaluationId)
                            .to(Evaluations::Table, Evaluations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Validations::Table, Validations::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_validations_unique")
                    .table(Validations::Table)
                    .col(Validations::UtilisateurId)
                    .col(Validations::EvaluationId)
                    .col(Validations::ItemId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Validations::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(EvaluationAttributions::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(EvaluationItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Evaluations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Competences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Utilisateurs::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Utilisateurs {
    Table,
    Id,
    Nom,
    Prenom,
    Email,
    Classe,
    Specialite,
    DateNaissance,
    DateEntreeBac,
    DateCertification,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Competences {
    Table,
    Id,
    Code,
    Libelle,
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    CompetenceId,
    CodeItem,
    SousItem,
    Description,
}

#[derive(DeriveIden)]
enum Evaluations {
    Table,
    Id,
    Pole,
    Module,
    Contexte,
    DateCreation,
}

#[derive(DeriveIden)]
enum EvaluationItems {
    Table,
    Id,
    EvaluationId,
    ItemId,
}

#[derive(DeriveIden)]
enum EvaluationAttributions {
    Table,
    Id,
    EvaluationId,
    Classe,
    UtilisateurId,
}

#[derive(DeriveIden)]
enum Validations {
    Table,
    Id,
    UtilisateurId,
    EvaluationId,
    ItemId,
    NiveauValidation,
    Commentaire,
    Validateur,
    DateValidation,
}

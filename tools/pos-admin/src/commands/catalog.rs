use anyhow::Context as _;
use pos_client::View;
use pos_types::money::format_currency;
use pos_types::{Article, ArticleDraft, CategoryDraft, ProviderDraft};

use super::{Context, Table};
use crate::cli::{ArticleCommand, ArticleFields, CategoryCommand, ProviderCommand};

pub async fn articles(ctx: &Context, command: ArticleCommand) -> anyhow::Result<()> {
    ctx.api.require_view(View::Articles)?;
    let service = ctx.api.articles();

    match command {
        ArticleCommand::List { search } => {
            let articles = service.list().await?;
            let term = search.unwrap_or_default().trim().to_lowercase();
            let mut table = Table::new(&[
                "ID", "Título", "Categoría", "Proveedor", "Costo", "Margen", "Precio", "Stock",
            ]);
            for article in articles
                .iter()
                .filter(|a| term.is_empty() || a.title.to_lowercase().contains(&term))
            {
                table.push(article_row(article));
            }
            table.print();
        }
        ArticleCommand::Create(fields) => {
            let mut draft = ArticleDraft::new();
            apply_fields(&mut draft, fields);
            let article = service.create(&draft).await?;
            println!(
                "Article {} created: {} at {}",
                article.id,
                article.title,
                format_currency(article.final_price)
            );
        }
        ArticleCommand::Update { id, fields } => {
            ctx.api.require_admin("update article")?;
            let articles = service.list().await?;
            let current = articles
                .iter()
                .find(|a| a.id == id)
                .with_context(|| format!("article {id} not found"))?;
            let mut draft = ArticleDraft::from_article(current);
            apply_fields(&mut draft, fields);
            let article = service.update(id, &draft).await?;
            println!("Article {} updated", article.id);
        }
        ArticleCommand::Delete { id } => {
            ctx.api.require_admin("delete article")?;
            if !ctx.confirm(&format!("Delete article {id}?"))? {
                println!("Cancelled");
                return Ok(());
            }
            service.delete(id).await?;
            println!("Article {id} deleted");
        }
    }
    Ok(())
}

fn article_row(article: &Article) -> Vec<String> {
    let category = article
        .category
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| article.category_id.to_string());
    let provider = article
        .provider
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| article.provider_id.to_string());
    vec![
        article.id.to_string(),
        article.title.clone(),
        category,
        provider,
        format_currency(article.unit_price),
        format!("{}%", article.profit_margin),
        format_currency(article.final_price),
        article.stock.to_string(),
    ]
}

/// Copy the given flags onto the draft. An explicit price is applied last so
/// it overrides the one derived from cost and margin.
fn apply_fields(draft: &mut ArticleDraft, fields: ArticleFields) {
    if let Some(title) = fields.title {
        draft.title = title;
    }
    if let Some(content) = fields.content {
        draft.content = content;
    }
    if let Some(stock) = fields.stock {
        draft.stock = stock;
    }
    if let Some(category) = fields.category {
        draft.category_id = Some(category);
    }
    if let Some(provider) = fields.provider {
        draft.provider_id = Some(provider);
    }
    if let Some(cost) = fields.cost {
        draft.set_unit_price(cost);
    }
    if let Some(margin) = fields.margin {
        draft.set_profit_margin(margin);
    }
    if let Some(price) = fields.price {
        draft.set_final_price(price);
    }
}

pub async fn categories(ctx: &Context, command: CategoryCommand) -> anyhow::Result<()> {
    ctx.api.require_view(View::Categories)?;
    let service = ctx.api.categories();

    match command {
        CategoryCommand::List => {
            let mut table = Table::new(&["ID", "Nombre"]);
            for category in service.list().await? {
                table.push(vec![category.id.to_string(), category.name]);
            }
            table.print();
        }
        CategoryCommand::Create { name } => {
            let category = service.create(&CategoryDraft { name }).await?;
            println!("Category {} created: {}", category.id, category.name);
        }
        CategoryCommand::Update { id, name } => {
            let category = service.update(id, &CategoryDraft { name }).await?;
            println!("Category {} renamed to {}", category.id, category.name);
        }
    }
    Ok(())
}

pub async fn providers(ctx: &Context, command: ProviderCommand) -> anyhow::Result<()> {
    ctx.api.require_view(View::Providers)?;
    let service = ctx.api.providers();

    match command {
        ProviderCommand::List => {
            let mut table = Table::new(&["ID", "Nombre", "Contacto"]);
            for provider in service.list().await? {
                table.push(vec![
                    provider.id.to_string(),
                    provider.name,
                    provider.contact_info.unwrap_or_default(),
                ]);
            }
            table.print();
        }
        ProviderCommand::Create { name, contact } => {
            let draft = ProviderDraft {
                name,
                contact_info: contact.unwrap_or_default(),
            };
            draft.validate()?;
            if !ctx.confirm(&format!("Save provider '{}'?", draft.name.trim()))? {
                println!("Cancelled");
                return Ok(());
            }
            let provider = service.create(&draft).await?;
            println!("Provider {} created: {}", provider.id, provider.name);
        }
        ProviderCommand::Update { id, name, contact } => {
            let current = service
                .list()
                .await?
                .into_iter()
                .find(|p| p.id == id)
                .with_context(|| format!("provider {id} not found"))?;
            let draft = ProviderDraft {
                name: name.unwrap_or(current.name),
                contact_info: contact.or(current.contact_info).unwrap_or_default(),
            };
            draft.validate()?;
            if !ctx.confirm(&format!("Save changes to provider {id}?"))? {
                println!("Cancelled");
                return Ok(());
            }
            let provider = service.update(id, &draft).await?;
            println!("Provider {} updated", provider.id);
        }
        ProviderCommand::Delete { id } => {
            if !ctx.confirm(&format!("Delete provider {id}?"))? {
                println!("Cancelled");
                return Ok(());
            }
            service.delete(id).await?;
            println!("Provider {id} deleted");
        }
    }
    Ok(())
}

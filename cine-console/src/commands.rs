//! Command handlers

use anyhow::{Context, anyhow, bail};
use chrono::NaiveDate;
use cine_client::booking::BookingSession;
use cine_client::{
    Authenticated, CineClient, ClientError, Guest, ListFilter, ListView, Resource, ResourceStore,
};
use rust_decimal::Decimal;
use shared::models::{Role, SeatId};

use crate::ListArgs;
use crate::render::{self, ProductArg};

/// Surface the client's user-facing message at the binary edge
fn visible(e: ClientError) -> anyhow::Error {
    let code = e.code();
    tracing::debug!(%code, category = code.category().name(), error = %e, "request failed");
    anyhow!(e.user_message())
}

async fn signed_in(client: CineClient<Guest>) -> anyhow::Result<CineClient<Authenticated>> {
    client.restore_session().await.map_err(|(e, _)| {
        tracing::debug!(error = %e, "restore failed");
        anyhow!("not signed in ({}); run `cine login` first", e.user_message())
    })
}

async fn load<R: Resource>(store: &mut ResourceStore<R>) -> anyhow::Result<()> {
    store.fetch_all().await.map_err(visible)?;
    Ok(())
}

fn apply_list(view: &mut ListView, list: &ListArgs) {
    if let Some(search) = &list.search {
        view.set_search(search.clone());
    }
}

pub async fn login(client: CineClient<Guest>, email: &str, password: &str) -> anyhow::Result<()> {
    let client = client
        .login(email, password)
        .await
        .map_err(|(e, _)| visible(e))?;
    let user = client.current_user().map_err(visible)?;
    println!("Signed in as {} <{}> ({})", user.name, user.email, user.role);
    Ok(())
}

pub async fn logout(client: CineClient<Guest>) -> anyhow::Result<()> {
    if client.forget_session().map_err(visible)? {
        println!("Signed out");
    } else {
        println!("Not signed in");
    }
    Ok(())
}

pub async fn whoami(client: CineClient<Guest>) -> anyhow::Result<()> {
    let client = signed_in(client).await?;
    let user = client.current_user().map_err(visible)?;
    println!("{} <{}>", user.name, user.email);
    println!("  id:   {}", user.id);
    println!("  role: {}", user.role);
    Ok(())
}

pub async fn movies(
    client: CineClient<Guest>,
    list: ListArgs,
    status: Option<String>,
) -> anyhow::Result<()> {
    let mut store = client.movies();
    load(&mut store).await?;

    let mut view = client.list_view();
    apply_list(&mut view, &list);
    if let Some(status) = status {
        view.set_filter(ListFilter::Category(status));
    }
    view.set_page(list.page);
    render::print_page("Movies", &view.view(store.records()), |m| {
        let released = m
            .release_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".into());
        format!("{:<28} {:<12} {}", m.title, m.status, released)
    });
    Ok(())
}

pub async fn users(client: CineClient<Guest>, role: Role, list: ListArgs) -> anyhow::Result<()> {
    let client = signed_in(client).await?;
    let mut store = client.users(role);
    load(&mut store).await?;

    let mut view = client.list_view();
    apply_list(&mut view, &list);
    view.set_page(list.page);
    render::print_page(&format!("Users ({role})"), &view.view(store.records()), |u| {
        format!(
            "{:<24} {:<28} {}",
            u.name,
            u.email,
            u.phone.as_deref().unwrap_or("-")
        )
    });
    Ok(())
}

pub async fn employees(
    client: CineClient<Guest>,
    list: ListArgs,
    shift: Option<String>,
    public: bool,
) -> anyhow::Result<()> {
    let (mut store, view) = if public {
        (client.employee_directory(), client.list_view())
    } else {
        let client = signed_in(client).await?;
        (client.employees(), client.list_view())
    };
    load(&mut store).await?;

    let mut view = view;
    apply_list(&mut view, &list);
    if let Some(shift) = shift {
        view.set_filter(ListFilter::Category(shift));
    }
    view.set_page(list.page);
    render::print_page("Employees", &view.view(store.records()), |e| {
        format!(
            "{:<24} {:<16} {:<10} {}",
            e.name,
            e.cinema.as_deref().unwrap_or("-"),
            e.shift.as_deref().unwrap_or("-"),
            e.position.as_deref().unwrap_or("-")
        )
    });
    Ok(())
}

pub async fn reviews(
    client: CineClient<Guest>,
    list: ListArgs,
    rating: Option<u8>,
    date: Option<NaiveDate>,
) -> anyhow::Result<()> {
    if rating.is_some() && date.is_some() {
        bail!("use either --rating or --date, not both");
    }
    let client = signed_in(client).await?;
    let mut store = client.reviews();
    load(&mut store).await?;

    let mut view = client.list_view();
    apply_list(&mut view, &list);
    if let Some(rating) = rating {
        view.set_filter(ListFilter::Category(rating.to_string()));
    }
    if let Some(date) = date {
        view.set_filter(ListFilter::Date(date));
    }
    view.set_page(list.page);
    render::print_page("Reviews", &view.view(store.records()), |r| {
        format!(
            "{}{} {:<20} {}",
            "★".repeat(r.rating as usize),
            "☆".repeat(shared::models::MAX_RATING.saturating_sub(r.rating) as usize),
            r.movie_title.as_deref().unwrap_or(&r.movie_id),
            r.comment
        )
    });
    Ok(())
}

pub struct QuoteRequest {
    pub showtime: String,
    pub tickets: usize,
    pub seats: Vec<String>,
    pub products: Vec<ProductArg>,
    pub ticket_price: Option<Decimal>,
}

/// Configured price first, then the `--ticket-price` flag, then the showtime's own
fn resolve_ticket_price(
    configured: Option<Decimal>,
    flag: Option<Decimal>,
    showtime: Option<Decimal>,
) -> Option<Decimal> {
    configured.or(flag).or(showtime)
}

pub async fn quote(client: CineClient<Guest>, request: QuoteRequest) -> anyhow::Result<()> {
    let mut showtimes = client.showtimes();
    load(&mut showtimes).await?;
    let showtime = showtimes
        .get(&request.showtime)
        .cloned()
        .with_context(|| format!("showtime {} not found", request.showtime))?;

    let mut catalog = client.products();
    if !request.products.is_empty() {
        load(&mut catalog).await?;
    }

    // Signed-in users get the configured price and ticket limit
    let settings = match client.restore_session().await {
        Ok(client) => Some(client.settings().await.map_err(visible)?),
        Err(_) => None,
    };
    let ticket_price = resolve_ticket_price(
        settings.as_ref().map(|s| s.ticket_price),
        request.ticket_price,
        showtime.ticket_price,
    )
    .context("no ticket price known; pass --ticket-price or sign in")?;
    let max_tickets = settings
        .as_ref()
        .map_or(10, |s| s.max_tickets_per_booking as usize);
    let currency = settings
        .as_ref()
        .map_or("EUR".to_string(), |s| s.currency.clone());

    let mut booking = BookingSession::new(showtime, ticket_price, max_tickets);
    booking.set_ticket_count(request.tickets);
    booking.next().map_err(|e| anyhow!(e))?;

    for label in &request.seats {
        let id: SeatId = label.parse().map_err(|e: shared::AppError| anyhow!(e.message))?;
        booking.click_seat(id).map_err(|e| anyhow!(e))?;
    }
    booking.next().map_err(|e| anyhow!(e))?;

    for arg in &request.products {
        let product = catalog
            .records()
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(&arg.name))
            .with_context(|| format!("product {:?} not found", arg.name))?;
        booking.set_product_amount(product, arg.amount);
    }
    booking.next().map_err(|e| anyhow!(e))?;

    let summary = booking.summary().map_err(|e| anyhow!(e))?;
    println!("{}", render::quote(&summary, &currency));
    Ok(())
}

pub async fn settings(client: CineClient<Guest>) -> anyhow::Result<()> {
    let client = signed_in(client).await?;
    let settings = client.settings().await.map_err(visible)?;
    println!(
        "ticket price:     {}",
        render::money(settings.ticket_price, &settings.currency)
    );
    println!("max per booking:  {}", settings.max_tickets_per_booking);
    for (key, value) in &settings.extra {
        println!("{key}: {value}");
    }
    Ok(())
}

pub async fn chat(client: CineClient<Guest>, message: &str) -> anyhow::Result<()> {
    let client = signed_in(client).await?;
    let reply = client.chat(message).await.map_err(visible)?;
    println!("{}", reply.reply);
    Ok(())
}

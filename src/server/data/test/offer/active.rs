use super::*;

/// Tests expired offers are excluded while upcoming ones are kept.
///
/// Expected: Ok with the running and upcoming offers, soonest ending first
#[tokio::test]
async fn excludes_expired_offers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;
    let now = Utc::now();

    factory::offer::create_offer(
        db,
        product.id,
        10.0,
        now - Duration::days(10),
        now - Duration::days(1),
    )
    .await?;
    let running = factory::offer::create_offer(
        db,
        product.id,
        15.0,
        now - Duration::days(1),
        now + Duration::days(2),
    )
    .await?;
    let upcoming = factory::offer::create_offer(
        db,
        product.id,
        20.0,
        now + Duration::days(5),
        now + Duration::days(9),
    )
    .await?;

    let offers = OfferRepository::new(db).active(now).await?;

    assert_eq!(
        offers.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![running.id, upcoming.id]
    );

    Ok(())
}

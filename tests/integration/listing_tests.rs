//! Listing catalog and search integration tests

#[cfg(test)]
mod tests {
    use crate::common::ListingFactory;
    use crate::common::assertions::PageAssertions;
    use estate_hub::core::listings::{ApprovalState, ListingType, ListingUpdate, PropertyType};
    use estate_hub::core::types::PageRequest;
    use estate_hub::{ListingCatalog, ListingFilter, ListingQuery, ListingSort, MarketError};

    fn approved() -> ListingFilter {
        ListingFilter {
            approved_only: true,
            ..Default::default()
        }
    }

    // ==================== Search ====================

    #[test]
    fn test_default_query_is_newest_first() {
        let catalog = ListingFactory::catalog();
        let page = catalog.search(&ListingQuery {
            filter: approved(),
            ..Default::default()
        });

        page.assert_titles(&[
            "Stanley Sea View",
            "Dokki Studio",
            "Sheikh Zayed Villa",
            "Maadi Duplex",
            "Garden City Flat",
        ]);
    }

    #[test]
    fn test_city_filter_is_case_insensitive() {
        let catalog = ListingFactory::catalog();
        let page = catalog.search(&ListingQuery {
            filter: ListingFilter {
                city: Some("GIZA".to_string()),
                ..approved()
            },
            sort: ListingSort::PriceAsc,
            ..Default::default()
        });

        page.assert_titles(&["Dokki Studio", "Sheikh Zayed Villa"]);
    }

    #[test]
    fn test_text_search_covers_description() {
        let catalog = ListingFactory::catalog();
        let page = catalog.search(&ListingQuery {
            filter: ListingFilter {
                search: Some("mediterranean".to_string()),
                ..Default::default()
            },
            ..Default::default()
        });

        page.assert_titles(&["Stanley Sea View"]);
    }

    #[test]
    fn test_combined_filters() {
        let catalog = ListingFactory::catalog();
        let page = catalog.search(&ListingQuery {
            filter: ListingFilter {
                min_bedrooms: Some(3),
                listing_type: Some(ListingType::Sale),
                max_price: Some(500_000.0),
                ..approved()
            },
            sort: ListingSort::BedroomsDesc,
            ..Default::default()
        });

        page.assert_titles(&["Maadi Duplex", "Stanley Sea View"]);
    }

    #[test]
    fn test_pending_listings_need_explicit_opt_in() {
        let catalog = ListingFactory::catalog();
        let villas = |filter: ListingFilter| {
            catalog.search(&ListingQuery {
                filter: ListingFilter {
                    property_type: Some(PropertyType::Villa),
                    ..filter
                },
                ..Default::default()
            })
        };

        villas(ListingFilter::default()).assert_titles(&["Unreviewed Villa", "Sheikh Zayed Villa"]);
        villas(approved()).assert_titles(&["Sheikh Zayed Villa"]);
    }

    #[test]
    fn test_last_page_metadata() {
        let catalog = ListingFactory::catalog();
        let page = catalog.search(&ListingQuery {
            filter: approved(),
            sort: ListingSort::Newest,
            page: PageRequest::new(3, 2),
        });

        page.assert_titles(&["Garden City Flat"]);
        assert_eq!(page.pagination.total, 5);
        assert_eq!(page.pagination.pages, 3);
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let catalog = ListingFactory::catalog();
        let page = catalog.search(&ListingQuery {
            page: PageRequest::new(9, 10),
            ..Default::default()
        });

        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 6);
    }

    // ==================== Catalog lifecycle ====================

    #[test]
    fn test_listing_lifecycle() {
        let catalog = ListingCatalog::new();
        let created = catalog
            .create(ListingFactory::new_listing("  Rehab Townhouse "), Some("agent-1".into()))
            .unwrap();
        assert_eq!(created.title, "Rehab Townhouse");
        assert_eq!(created.approval, ApprovalState::Pending);

        let updated = catalog
            .update(
                created.id,
                ListingUpdate {
                    bedrooms: Some(4),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.bedrooms, 4);
        assert_eq!(updated.owner_id.as_deref(), Some("agent-1"));

        let approved = catalog.set_approval(created.id, ApprovalState::Approved).unwrap();
        assert!(approved.is_approved());

        catalog.delete(created.id).unwrap();
        assert!(matches!(catalog.get(created.id), Err(MarketError::NotFound(_))));
    }

    #[test]
    fn test_clones_share_state() {
        let catalog = ListingFactory::catalog();
        let handle = catalog.clone();

        handle.create(ListingFactory::new_listing("Shared"), None).unwrap();
        assert_eq!(catalog.len(), 7);
    }
}
